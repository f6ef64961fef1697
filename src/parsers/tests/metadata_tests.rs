use crate::parsers::html::PageDocument;
use crate::parsers::metadata::{
    AUTHOR_RULE, LICENSE_RULE, MIN_VERSION_RULE, detect_features, extract, is_github_link,
};
use crate::results::ThemeLink;
use url::Url;

mod extract_tests {
    use super::*;

    const DETAIL: &str = r#"<html><head><title>Ananke | Hugo Themes</title></head><body>
        <main>
            <h1>Ananke</h1>
            <p>  A starter theme for Hugo.  </p>
            <a href="/themes/">Back</a>
            <a class="btn" href="https://gohugo-ananke-theme-demo.netlify.app/">Demo</a>
            <a href="https://github.com/theNewDynamic/gohugo-theme-ananke">Download</a>
            <ul>
                <li>Author: Jane Doe</li>
                <li>License: MIT</li>
                <li>Min Hugo Version: 0.84.0</li>
            </ul>
            <div>This theme is Responsive and minimalist.</div>
        </main>
    </body></html>"#;

    fn link() -> ThemeLink {
        ThemeLink {
            url: "https://themes.gohugo.io/themes/gohugo-theme-ananke/".to_string(),
            name: "gohugo-theme-ananke".to_string(),
            title: "Ananke".to_string(),
        }
    }

    fn page(html: &str) -> PageDocument {
        PageDocument::parse(html, "https://themes.gohugo.io/themes/gohugo-theme-ananke/").unwrap()
    }

    #[test]
    fn test_full_detail_page() {
        let record = extract(&page(DETAIL), &link());

        assert_eq!(record.name, "gohugo-theme-ananke");
        assert_eq!(record.title, "Ananke");
        assert_eq!(
            record.github_url.as_deref(),
            Some("https://github.com/theNewDynamic/gohugo-theme-ananke")
        );
        assert_eq!(
            record.demo_url.as_deref(),
            Some("https://gohugo-ananke-theme-demo.netlify.app/")
        );
        assert_eq!(record.author.as_deref(), Some("Jane Doe"));
        assert_eq!(record.license.as_deref(), Some("MIT"));
        assert_eq!(record.min_hugo_version.as_deref(), Some("0.84.0"));
        assert_eq!(record.description.as_deref(), Some("A starter theme for Hugo."));
        assert_eq!(record.features, vec!["responsive", "minimal"]);
    }

    #[test]
    fn test_missing_everything_is_none() {
        let record = extract(&page("<html><body><div>Nothing here.</div></body></html>"), &link());

        assert_eq!(record.github_url, None);
        assert_eq!(record.demo_url, None);
        assert_eq!(record.author, None);
        assert_eq!(record.license, None);
        assert_eq!(record.min_hugo_version, None);
        assert_eq!(record.description, None);
        assert!(record.features.is_empty());
    }

    #[test]
    fn test_first_github_anchor_wins() {
        let html = r#"<body>
            <a href="https://gitlab.com/a/b">GitLab mirror</a>
            <a href="https://github.com/first/repo">Repo</a>
            <a href="https://github.com/second/repo">Fork</a>
        </body>"#;
        let record = extract(&page(html), &link());
        assert_eq!(record.github_url.as_deref(), Some("https://github.com/first/repo"));
    }

    #[test]
    fn test_github_in_query_string_ignored() {
        let html = r#"<body>
            <a href="https://twitter.com/share?u=https://github.com/x/y">Share</a>
            <a href="https://example.com/#github.com">Anchor</a>
            <a href="https://github.com/real/theme">Source</a>
        </body>"#;
        let record = extract(&page(html), &link());
        assert_eq!(record.github_url.as_deref(), Some("https://github.com/real/theme"));
    }

    #[test]
    fn test_share_link_alone_is_not_github() {
        let html = r#"<body><a href="https://twitter.com/share?u=https://github.com/x/y">Share</a></body>"#;
        let record = extract(&page(html), &link());
        assert_eq!(record.github_url, None);
    }

    #[test]
    fn test_is_github_link() {
        let url = |s: &str| Url::parse(s).unwrap();
        assert!(is_github_link(&url("https://github.com/owner/repo")));
        assert!(is_github_link(&url("https://www.github.com/owner/repo")));
        assert!(is_github_link(&url("https://proxy.example.com/github.com/owner/repo")));
        assert!(!is_github_link(&url("https://owner.github.io/repo/")));
        assert!(!is_github_link(&url("https://example.com/?next=github.com")));
    }

    #[test]
    fn test_demo_matches_preview_case_insensitively() {
        let html = r#"<body><a href="/about/">About</a><a href="https://preview.example.com/">Live PREVIEW</a></body>"#;
        let record = extract(&page(html), &link());
        assert_eq!(record.demo_url.as_deref(), Some("https://preview.example.com/"));
    }

    #[test]
    fn test_scraped_at_is_stamped() {
        let before = chrono::Utc::now();
        let record = extract(&page(DETAIL), &link());
        assert!(record.scraped_at >= before);
    }
}

mod field_rule_tests {
    use super::*;

    #[test]
    fn test_label_with_colon() {
        assert_eq!(AUTHOR_RULE.apply("Author: Jane Doe\n").as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_label_case_insensitive() {
        assert_eq!(LICENSE_RULE.apply("LICENSE   Apache-2.0").as_deref(), Some("Apache-2.0"));
    }

    #[test]
    fn test_value_on_next_line() {
        assert_eq!(AUTHOR_RULE.apply("Author:\nJane Doe\nLicense: MIT").as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_rule_field_names() {
        assert_eq!(AUTHOR_RULE.field, "author");
        assert_eq!(LICENSE_RULE.field, "license");
        assert_eq!(MIN_VERSION_RULE.field, "minHugoVersion");
    }

    #[test]
    fn test_label_absent() {
        assert_eq!(AUTHOR_RULE.apply("Made by Jane Doe"), None);
        assert_eq!(MIN_VERSION_RULE.apply(""), None);
    }

    #[test]
    fn test_minimum_version_label_variants() {
        assert_eq!(MIN_VERSION_RULE.apply("Minimum Hugo Version: 0.100.0").as_deref(), Some("0.100.0"));
        assert_eq!(MIN_VERSION_RULE.apply("min hugo version 0.41").as_deref(), Some("0.41"));
    }

    #[test]
    fn test_label_in_prose_matches() {
        // Heuristic: a label inside unrelated prose still yields a value
        assert_eq!(
            AUTHOR_RULE.apply("Written by the author of many themes").as_deref(),
            Some("of many themes")
        );
    }
}

mod feature_tests {
    use super::*;

    #[test]
    fn test_substring_and_case_insensitive() {
        assert_eq!(
            detect_features("This theme is Responsive and minimalist."),
            vec!["responsive", "minimal"]
        );
    }

    #[test]
    fn test_duplicates_within_page_collapse() {
        assert_eq!(detect_features("Blog blog BLOG"), vec!["blog"]);
    }

    #[test]
    fn test_multi_word_keyword() {
        let features = detect_features("Supports Dark Mode, site Search and SEO.");
        assert_eq!(features, vec!["dark mode", "search", "seo"]);
    }

    #[test]
    fn test_no_features() {
        assert!(detect_features("Nothing to see").is_empty());
    }
}
