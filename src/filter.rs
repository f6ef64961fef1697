use regex::Regex;
use url::Url;

/// Decides which listing-page anchors point at a theme detail page
#[derive(Debug)]
pub struct LinkFilter {
    path_prefix: String,
    exclude_regexes: Vec<Regex>,
}

impl LinkFilter {
    /// Create a new link filter from a detail path prefix and exclude patterns
    pub fn new(path_prefix: &str, exclude_patterns: &[String]) -> Result<Self, regex::Error> {
        let mut exclude_regexes = Vec::with_capacity(exclude_patterns.len());
        for pattern in exclude_patterns {
            exclude_regexes.push(Regex::new(pattern)?);
        }

        Ok(Self {
            path_prefix: path_prefix.to_string(),
            exclude_regexes,
        })
    }

    /// A detail link's path contains the prefix and is strictly longer than it
    pub fn accepts(&self, url: &Url) -> bool {
        let path = url.path();
        if !path.contains(&self.path_prefix) || path.len() <= self.path_prefix.len() {
            return false;
        }

        // Exclusions take precedence
        let url_str = url.as_str();
        !self.exclude_regexes.iter().any(|re| re.is_match(url_str))
    }

    /// Path substring following the prefix with trailing slashes removed
    pub fn theme_name(&self, url: &Url) -> String {
        let path = url.path();
        match path.find(&self.path_prefix) {
            Some(idx) => path[idx + self.path_prefix.len()..]
                .trim_end_matches('/')
                .to_string(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> LinkFilter {
        LinkFilter::new("/themes/", &[]).unwrap()
    }

    #[test]
    fn test_index_link_rejected() {
        let index = Url::parse("https://themes.gohugo.io/themes/").unwrap();
        assert!(!filter().accepts(&index));
    }

    #[test]
    fn test_detail_link_accepted() {
        let detail = Url::parse("https://themes.gohugo.io/themes/gohugo-theme-ananke/").unwrap();
        assert!(filter().accepts(&detail));
        assert_eq!(filter().theme_name(&detail), "gohugo-theme-ananke");
    }

    #[test]
    fn test_unrelated_path_rejected() {
        let tags = Url::parse("https://themes.gohugo.io/tags/blog/").unwrap();
        assert!(!filter().accepts(&tags));
    }

    #[test]
    fn test_prefix_inside_longer_path() {
        let nested = Url::parse("https://example.com/en/themes/paper///").unwrap();
        assert!(filter().accepts(&nested));
        assert_eq!(filter().theme_name(&nested), "paper");
    }

    #[test]
    fn test_exclude_patterns() {
        let filter = LinkFilter::new("/themes/", &[r"/themes/page/\d+".to_string()]).unwrap();
        let paged = Url::parse("https://themes.gohugo.io/themes/page/2/").unwrap();
        assert!(!filter.accepts(&paged));

        let detail = Url::parse("https://themes.gohugo.io/themes/paper/").unwrap();
        assert!(filter.accepts(&detail));
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        assert!(LinkFilter::new("/themes/", &["(".to_string()]).is_err());
    }
}
