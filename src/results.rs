use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A theme detail link found on the listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeLink {
    /// Absolute URL of the detail page
    pub url: String,

    /// Path segment following the detail prefix, trailing slashes removed (may be empty)
    pub name: String,

    /// Link text with the title prefix stripped (may be empty)
    pub title: String,
}

/// Metadata scraped from a single theme detail page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeRecord {
    pub url: String,
    pub name: String,
    pub title: String,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub author: Option<String>,
    pub license: Option<String>,
    pub min_hugo_version: Option<String>,
    pub description: Option<String>,

    /// Feature keywords found in the page text, in vocabulary order
    pub features: Vec<String>,

    pub scraped_at: DateTime<Utc>,
}

/// Contents of `themes-with-github.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionSummary {
    pub themes: Vec<ThemeRecord>,
    pub extracted_at: DateTime<Utc>,
    pub total_count: usize,
}

impl ExtractionSummary {
    pub fn new(themes: Vec<ThemeRecord>) -> Self {
        let total_count = themes.len();
        Self {
            themes,
            extracted_at: Utc::now(),
            total_count,
        }
    }

    /// Number of records that resolved a GitHub repository
    pub fn with_github_count(&self) -> usize {
        self.themes.iter().filter(|t| t.github_url.is_some()).count()
    }
}

/// General facts about the analyzed page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub url: String,
    pub title: Option<String>,
    pub total_elements: usize,
    pub total_links: usize,
}

/// Tag, class, id and a text excerpt of one element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSnapshot {
    pub tag: String,
    pub class: Option<String>,
    pub id: Option<String>,
    pub text: String,
}

/// Result of trying one selector candidate against the page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectorCandidate {
    pub selector: String,
    pub count: usize,

    /// First match, present only when `count > 0`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample: Option<ElementSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassCount {
    pub class: String,
    pub count: usize,
}

/// Immediate child of a sampled card element
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChildSnapshot {
    pub tag: String,
    pub class: Option<String>,
    pub text: String,
}

/// An element matching the card-like selector
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSample {
    pub tag: String,
    pub class: Option<String>,
    pub outer_html: String,
    pub text: String,
    pub children: Vec<ChildSnapshot>,
}

/// Contents of `themes-site-structure.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureReport {
    pub page_info: PageInfo,
    pub selector_candidates: Vec<SelectorCandidate>,
    pub top_classes: Vec<ClassCount>,
    pub sample_elements: Vec<CardSample>,
    pub analyzed_at: DateTime<Utc>,
}
