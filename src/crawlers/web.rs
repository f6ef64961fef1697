use crate::crawlers::crawler::PageSource;
use crate::error::{Result, ScrapeError};
use fantoccini::{Client, ClientBuilder};
use serde_json::{Value, json};
use std::time::Duration;
use tokio::time::timeout;

/// Endpoints tried when the configured WebDriver URL refuses a session
const FALLBACK_WEBDRIVER_URLS: &[&str] = &[
    "http://localhost:9515", // ChromeDriver default
    "http://localhost:4444", // geckodriver / Selenium default
    "http://127.0.0.1:4444", // Try with IP instead of localhost
];

/// Polls of `document.readyState` after navigation, 100ms apart
const READY_POLLS: usize = 20;

/// One headless browser session driven over WebDriver
pub struct WebDriverSession {
    client: Client,
    navigation_timeout: Duration,
}

impl WebDriverSession {
    /// Connects to the WebDriver instance, falling back to common local endpoints
    pub async fn connect(webdriver_url: &str, navigation_timeout: Duration) -> Result<Self> {
        let client = connect_to_webdriver(webdriver_url).await?;
        Ok(Self {
            client,
            navigation_timeout,
        })
    }

    /// Waits until the page reports `readyState == "complete"` or the polls run out
    async fn wait_for_ready(&self) {
        for _ in 0..READY_POLLS {
            match self
                .client
                .execute("return document.readyState === 'complete';", vec![])
                .await
            {
                Ok(val) if val.as_bool().unwrap_or(false) => return,
                _ => tokio::time::sleep(Duration::from_millis(100)).await,
            }
        }
        ::log::debug!("Page never reported readyState complete, using current DOM");
    }

    /// Full document size, so the screenshot can cover the whole page
    async fn document_size(&self) -> Result<(u32, u32)> {
        let size = self
            .client
            .execute(
                "return [document.documentElement.scrollWidth, document.documentElement.scrollHeight];",
                vec![],
            )
            .await?;
        Ok((dimension(&size, 0), dimension(&size, 1)))
    }
}

impl PageSource for WebDriverSession {
    async fn open(&mut self, url: &str) -> Result<String> {
        ::log::debug!("Navigating to {}", url);
        let secs = self.navigation_timeout.as_secs();

        let loaded = timeout(self.navigation_timeout, async {
            self.client.goto(url).await?;
            self.wait_for_ready().await;
            Ok::<_, ScrapeError>(self.client.source().await?)
        })
        .await;

        match loaded {
            Ok(result) => result,
            Err(_) => Err(ScrapeError::Timeout {
                url: url.to_string(),
                secs,
            }),
        }
    }

    async fn screenshot(&mut self) -> Result<Vec<u8>> {
        match self.document_size().await {
            Ok((width, height)) => {
                ::log::debug!("Resizing window to {}x{} for full-page capture", width, height);
                if let Err(e) = self.client.set_window_size(width, height).await {
                    ::log::warn!("Failed to resize window, capturing viewport only: {}", e);
                }
            }
            Err(e) => ::log::warn!("Failed to measure page, capturing viewport only: {}", e),
        }

        Ok(self.client.screenshot().await?)
    }

    async fn close(self) -> Result<()> {
        ::log::debug!("Closing WebDriver session");
        self.client.close().await?;
        Ok(())
    }
}

/// Headless flags for Chrome and Firefox; each driver ignores the other's options
fn headless_capabilities() -> serde_json::Map<String, Value> {
    let caps = json!({
        "goog:chromeOptions": {
            "args": ["--headless=new", "--disable-gpu", "--no-sandbox", "--window-size=1920,1080"]
        },
        "moz:firefoxOptions": {
            "args": ["-headless"]
        }
    });

    match caps {
        Value::Object(map) => map,
        _ => serde_json::Map::new(),
    }
}

async fn try_connect(url: &str) -> std::result::Result<Client, fantoccini::error::NewSessionError> {
    let mut builder = ClientBuilder::native();
    builder.capabilities(headless_capabilities());
    builder.connect(url).await
}

/// Connects to the WebDriver instance
async fn connect_to_webdriver(webdriver_url: &str) -> Result<Client> {
    // Try to connect to the specified WebDriver URL
    match try_connect(webdriver_url).await {
        Ok(client) => {
            ::log::debug!("Connected to WebDriver at {}", webdriver_url);
            return Ok(client);
        }
        Err(e) => {
            ::log::error!("Failed to connect to WebDriver at {}: {}", webdriver_url, e);
        }
    }

    for url in FALLBACK_WEBDRIVER_URLS {
        if *url == webdriver_url {
            continue; // Skip if it's the same as the one we already tried
        }

        ::log::info!("Trying fallback WebDriver URL: {}", url);
        if let Ok(client) = try_connect(url).await {
            ::log::debug!("Connected to fallback WebDriver at {}", url);
            return Ok(client);
        }
    }

    ::log::error!(
        "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
    );
    Err(ScrapeError::WebDriverConnect(webdriver_url.to_string()))
}

fn dimension(value: &Value, index: usize) -> u32 {
    value
        .get(index)
        .and_then(Value::as_u64)
        .map(|v| v.clamp(1, u32::MAX as u64) as u32)
        .unwrap_or(1080)
}
