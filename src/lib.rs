// Re-export modules
pub mod analyzer;
pub mod config;
pub mod crawlers;
pub mod error;
pub mod extractor;
pub mod filter;
pub mod output;
pub mod parsers;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::ScraperConfig;
pub use error::{Result, ScrapeError};
pub use results::{ExtractionSummary, StructureReport, ThemeLink, ThemeRecord};

use crawlers::WebDriverSession;
use std::path::PathBuf;

/// Builder that opens a WebDriver session and runs one of the pipelines
pub struct Scraper {
    config: ScraperConfig,
    limit: Option<usize>,
}

impl Scraper {
    /// Create a new Scraper with the given configuration
    pub fn new(config: ScraperConfig) -> Self {
        Self {
            config,
            limit: None,
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: ScraperConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a file
    pub fn with_config_file(self, path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config = ScraperConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Number of detail pages the extractor visits
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Pause after each successful detail page visit
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.config.request_delay_ms = delay_ms;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    pub fn with_webdriver_url(mut self, url: &str) -> Self {
        self.config.webdriver_url = url.to_string();
        self
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Effective detail page limit
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(self.config.default_limit)
    }

    /// Visit theme detail pages and write `themes-with-github.json`
    pub async fn extract_themes(self) -> Result<ExtractionSummary> {
        let limit = self.limit();
        let session = self.connect().await?;
        extractor::run_extraction(session, &self.config, limit).await
    }

    /// Analyze the listing page and write the structure report and screenshot
    pub async fn analyze_structure(self) -> Result<StructureReport> {
        let session = self.connect().await?;
        analyzer::run_analysis(session, &self.config).await
    }

    async fn connect(&self) -> Result<WebDriverSession> {
        ::log::info!("Connecting to WebDriver at {}", self.config.webdriver_url);
        WebDriverSession::connect(&self.config.webdriver_url, self.config.navigation_timeout())
            .await
    }
}
