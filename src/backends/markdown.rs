//! Whole-page conversion to markdown.
//!
//! Fetches the page and converts everything in `<body>` to markdown with
//! `htmd`. Non-HTML bodies are returned as text, so a plain text URL still
//! yields content.

use super::{Backend, FetchedPage, fetch_page};
use crate::config::ExtractorConfig;
use crate::error::{BackendCause, MarkdownExtractionError};
use crate::parsers::{ContentKind, html, text};
use async_trait::async_trait;

/// Primary backend: converts the full page body to markdown
#[derive(Debug, Clone)]
pub struct MarkdownBackend {
    client: reqwest::Client,
}

impl MarkdownBackend {
    /// Create a backend with its own client built from `config`
    pub fn new(config: &ExtractorConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::with_client(config.build_client()?))
    }

    /// Create a backend sharing an existing client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn failure(url: &str, cause: impl Into<BackendCause>) -> MarkdownExtractionError {
        let err = MarkdownExtractionError {
            url: url.to_string(),
            source: cause.into(),
        };
        ::log::warn!("Markdown extraction failed for {}: {}", url, err.source);
        err
    }
}

#[async_trait]
impl Backend for MarkdownBackend {
    type Error = MarkdownExtractionError;

    fn name(&self) -> &'static str {
        "markdown"
    }

    async fn extract(&self, url: &str) -> Result<String, Self::Error> {
        ::log::debug!("Starting markdown extraction for URL: {}", url);

        let page = fetch_page(&self.client, url)
            .await
            .map_err(|e| Self::failure(url, e))?;

        let text = convert(&page).map_err(|e| Self::failure(url, e))?;

        ::log::info!("Successfully extracted text from {} using markdown", url);
        Ok(text)
    }
}

/// Converts a fetched page to tidy text
pub fn convert(page: &FetchedPage) -> Result<String, BackendCause> {
    let kind = ContentKind::detect(page.content_type.as_deref(), &page.body);
    if !kind.is_html() {
        return Ok(text::tidy(&page.body));
    }

    let document = html::parse_document(&page.body);
    if let Some(title) = &document.title {
        ::log::debug!("Converting page titled {:?}", title);
    }

    let markdown = html::to_markdown(&document.body)
        .map_err(|e| BackendCause::Convert(e.to_string()))?;

    Ok(text::tidy(&markdown))
}
