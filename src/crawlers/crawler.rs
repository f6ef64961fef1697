use crate::error::Result;

/// A single-page fetch capability the pipelines drive one URL at a time
///
/// Implemented by a live WebDriver session and by recorded fixtures, so the
/// extraction loop runs unchanged against either.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// Navigate to `url` and return the rendered page's serialized DOM
    async fn open(&mut self, url: &str) -> Result<String>;

    /// Capture the currently loaded page as a PNG
    async fn screenshot(&mut self) -> Result<Vec<u8>>;

    /// Release the underlying session
    async fn close(self) -> Result<()>
    where
        Self: Sized;
}
