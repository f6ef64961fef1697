use crate::crawlers::crawler::PageSource;
use crate::error::{Result, ScrapeError};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Recorded pages served in place of a live browser
///
/// Visits and closes are tracked through shared handles so they can still be
/// inspected after the source has been consumed by `close`.
#[derive(Debug, Default)]
pub struct FixtureSource {
    pages: HashMap<String, String>,
    timeouts: HashSet<String>,
    screenshot: Vec<u8>,
    visits: Arc<Mutex<Vec<String>>>,
    closes: Arc<AtomicUsize>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` whenever `url` is opened
    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    /// Opening `url` fails as if the navigation timed out
    pub fn with_timeout(mut self, url: &str) -> Self {
        self.timeouts.insert(url.to_string());
        self
    }

    pub fn with_screenshot(mut self, png: Vec<u8>) -> Self {
        self.screenshot = png;
        self
    }

    /// URLs opened so far, in order, failed ones included
    pub fn visits(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.visits)
    }

    /// Number of times `close` has run
    pub fn closes(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.closes)
    }
}

impl PageSource for FixtureSource {
    async fn open(&mut self, url: &str) -> Result<String> {
        if let Ok(mut visits) = self.visits.lock() {
            visits.push(url.to_string());
        }

        if self.timeouts.contains(url) {
            return Err(ScrapeError::Timeout {
                url: url.to_string(),
                secs: 0,
            });
        }

        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::Fixture(format!("no recorded page for {}", url)))
    }

    async fn screenshot(&mut self) -> Result<Vec<u8>> {
        Ok(self.screenshot.clone())
    }

    async fn close(self) -> Result<()> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
