use thiserror::Error;

/// Errors raised while driving the browser or persisting results
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// No WebDriver endpoint accepted a session
    #[error("failed to connect to a WebDriver server at {0}")]
    WebDriverConnect(String),

    /// A WebDriver command failed after the session was established
    #[error("WebDriver command failed: {0}")]
    WebDriver(#[from] fantoccini::error::CmdError),

    /// Navigation did not settle within the configured time
    #[error("timed out after {secs}s loading {url}")]
    Timeout { url: String, secs: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    /// Recorded page source had nothing for the URL, or was told to fail
    #[error("fixture error: {0}")]
    Fixture(String),
}

impl From<regex::Error> for ScrapeError {
    fn from(err: regex::Error) -> Self {
        ScrapeError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
