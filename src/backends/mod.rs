pub mod markdown;
pub mod readability;

pub use markdown::MarkdownBackend;
pub use readability::ReadabilityBackend;

use crate::error::FetchError;
use async_trait::async_trait;

/// A single text-extraction method
///
/// Implementors receive a URL that already passed validation and either
/// return the extracted text (possibly empty) or their own declared error.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Failure type this backend declares; only this type triggers a fallback
    type Error: std::error::Error + Send + Sync + 'static;

    /// Short name used in log messages
    fn name(&self) -> &'static str;

    /// Fetch the page at `url` and extract its text
    async fn extract(&self, url: &str) -> Result<String, Self::Error>;
}

/// A successfully fetched, non-empty response body
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Value of the Content-Type header, if any
    pub content_type: Option<String>,

    /// Decoded response body
    pub body: String,
}

/// Fetches `url`, rejecting non-success statuses and empty bodies
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<FetchedPage, FetchError> {
    ::log::debug!("Fetching {}", url);

    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let body = response.text().await?;
    if body.trim().is_empty() {
        return Err(FetchError::EmptyBody(status));
    }

    ::log::debug!(
        "Fetched {} bytes from {} ({})",
        body.len(),
        url,
        content_type.as_deref().unwrap_or("no content type")
    );

    Ok(FetchedPage { content_type, body })
}
