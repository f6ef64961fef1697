//! Best-effort metadata extraction from a rendered theme detail page.
//!
//! Labelled fields are read with line-oriented regexes over the page's visible
//! text. A label that appears in unrelated prose will produce a false positive;
//! that is accepted behavior for a heuristic scrape.

use crate::parsers::html::PageDocument;
use crate::results::{ThemeLink, ThemeRecord};
use chrono::Utc;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

const GITHUB_DOMAIN: &str = "github.com";

/// Keywords tested as plain substrings of the lowercased page text
pub const FEATURE_KEYWORDS: &[&str] = &[
    "responsive",
    "dark mode",
    "search",
    "multilingual",
    "seo",
    "fast",
    "minimal",
    "blog",
    "portfolio",
    "documentation",
];

/// A labelled field read as `<Label>[:\s]+<value until newline>`
pub struct FieldRule {
    pub field: &'static str,
    pattern: Regex,
}

impl FieldRule {
    fn new(field: &'static str, label: &str) -> Self {
        let pattern = Regex::new(&format!(r"(?i){}[:\s]+([^\n]+)", label))
            .expect("field rule label is a valid regex");
        Self { field, pattern }
    }

    /// Trimmed value following the first occurrence of the label, if any
    pub fn apply(&self, text: &str) -> Option<String> {
        let value = self.pattern.captures(text)?.get(1)?.as_str().trim();
        if value.is_empty() {
            return None;
        }
        ::log::trace!("{} matched: {}", self.field, value);
        Some(value.to_string())
    }
}

pub static AUTHOR_RULE: LazyLock<FieldRule> = LazyLock::new(|| FieldRule::new("author", "Author"));

pub static LICENSE_RULE: LazyLock<FieldRule> =
    LazyLock::new(|| FieldRule::new("license", "License"));

pub static MIN_VERSION_RULE: LazyLock<FieldRule> =
    LazyLock::new(|| FieldRule::new("minHugoVersion", r"Min(?:imum)?\s*Hugo\s*Version"));

/// Builds a record for one detail page; never fails, missing data becomes `None`
pub fn extract(document: &PageDocument, link: &ThemeLink) -> ThemeRecord {
    let text = document.visible_text();
    let anchors = document.anchors();

    let github_url = anchors
        .iter()
        .find(|a| is_github_link(&a.href))
        .map(|a| a.href.to_string());

    let demo_url = anchors
        .iter()
        .find(|a| {
            let label = a.text.to_lowercase();
            label.contains("demo") || label.contains("preview")
        })
        .map(|a| a.href.to_string());

    ThemeRecord {
        url: link.url.clone(),
        name: link.name.clone(),
        title: link.title.clone(),
        github_url,
        demo_url,
        author: AUTHOR_RULE.apply(&text),
        license: LICENSE_RULE.apply(&text),
        min_hugo_version: MIN_VERSION_RULE.apply(&text),
        description: document.first_paragraph(),
        features: detect_features(&text),
        scraped_at: Utc::now(),
    }
}

/// Host or path names GitHub; query strings and fragments are ignored
pub fn is_github_link(href: &Url) -> bool {
    href.host_str().is_some_and(|host| host.contains(GITHUB_DOMAIN))
        || href.path().contains(GITHUB_DOMAIN)
}

/// Vocabulary keywords present anywhere in the text, case-insensitive, no word boundaries
pub fn detect_features(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    FEATURE_KEYWORDS
        .iter()
        .filter(|keyword| lowered.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect()
}
