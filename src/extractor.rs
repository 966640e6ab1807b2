use crate::error::ExtractionError;
use async_trait::async_trait;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;

/// Shared contract for anything that turns a page URL into text
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Extract text from the page at `url`, reporting every failure
    async fn extract_text_from_page(&self, url: &str) -> Result<String, ExtractionError>;

    /// Extract text from the page at `url`, returning an empty string on any failure
    ///
    /// Errors and panics raised on the strict path are logged and swallowed.
    async fn extract_text_from_page_safe(&self, url: &str) -> String {
        match AssertUnwindSafe(self.extract_text_from_page(url))
            .catch_unwind()
            .await
        {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                ::log::warn!("Failed to extract text from {}: {}", url, e);
                String::new()
            }
            Err(_) => {
                ::log::warn!("Failed to extract text from {}: extractor panicked", url);
                String::new()
            }
        }
    }
}
