use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration shared by the structure analyzer and the metadata extractor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Listing page enumerating the themes
    #[serde(default = "default_listing_url")]
    pub listing_url: String,

    /// Path segment that marks a theme detail link
    #[serde(default = "default_detail_path_prefix")]
    pub detail_path_prefix: String,

    /// Phrase stripped from the front of a link's text to derive the title
    #[serde(default = "default_title_prefix")]
    pub title_prefix: String,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Directory the JSON dumps and screenshot are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Pause after each successful detail page visit
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,

    /// Per-navigation timeout
    #[serde(default = "default_navigation_timeout_secs")]
    pub navigation_timeout_secs: u64,

    /// Number of detail pages visited when no limit is given
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Regex patterns for detail links to skip during discovery
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
}

fn default_listing_url() -> String {
    "https://themes.gohugo.io/".to_string()
}

fn default_detail_path_prefix() -> String {
    "/themes/".to_string()
}

fn default_title_prefix() -> String {
    "Hugo Theme ".to_string()
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_request_delay_ms() -> u64 {
    1000
}

fn default_navigation_timeout_secs() -> u64 {
    30
}

fn default_limit() -> usize {
    10
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            listing_url: default_listing_url(),
            detail_path_prefix: default_detail_path_prefix(),
            title_prefix: default_title_prefix(),
            webdriver_url: default_webdriver_url(),
            output_dir: default_output_dir(),
            request_delay_ms: default_request_delay_ms(),
            navigation_timeout_secs: default_navigation_timeout_secs(),
            default_limit: default_limit(),
            exclude_patterns: Vec::new(),
        }
    }
}

impl ScraperConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Override the WebDriver URL with the `WEBDRIVER_URL` environment variable if set
    pub fn apply_env(mut self) -> Self {
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                self.webdriver_url = webdriver_url;
            }
        }
        self
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_secs(self.navigation_timeout_secs)
    }
}
