//! Boilerplate-removing extraction.
//!
//! Fetches the page, isolates the main article with `dom_smoothie`'s
//! Readability port and renders it as markdown. A page with nothing to
//! extract (non-HTML body, no article found) is an empty success, not a
//! failure.

use super::{Backend, FetchedPage, fetch_page};
use crate::config::ExtractorConfig;
use crate::error::{BackendCause, ReadabilityExtractionError};
use crate::parsers::{ContentKind, html, text};
use async_trait::async_trait;
use dom_smoothie::Readability;

/// Fallback backend: main-content extraction with boilerplate removed
#[derive(Debug, Clone)]
pub struct ReadabilityBackend {
    client: reqwest::Client,
}

impl ReadabilityBackend {
    /// Create a backend with its own client built from `config`
    pub fn new(config: &ExtractorConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::with_client(config.build_client()?))
    }

    /// Create a backend sharing an existing client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn failure(url: &str, cause: impl Into<BackendCause>) -> ReadabilityExtractionError {
        let err = ReadabilityExtractionError {
            url: url.to_string(),
            source: cause.into(),
        };
        ::log::warn!("Readability extraction failed for {}: {}", url, err.source);
        err
    }
}

#[async_trait]
impl Backend for ReadabilityBackend {
    type Error = ReadabilityExtractionError;

    fn name(&self) -> &'static str {
        "readability"
    }

    async fn extract(&self, url: &str) -> Result<String, Self::Error> {
        ::log::debug!("Starting readability extraction for URL: {}", url);

        let page = fetch_page(&self.client, url)
            .await
            .map_err(|e| Self::failure(url, e))?;

        let text = render(&page, url)
            .map_err(|e| Self::failure(url, e))?
            .unwrap_or_default();

        if text.is_empty() {
            ::log::debug!("No text content found for {} using readability", url);
        } else {
            ::log::info!("Successfully extracted text from {} using readability", url);
        }

        Ok(text)
    }
}

/// Renders the main content of a fetched page
///
/// Returns `Ok(None)` when the page legitimately has nothing to extract.
pub fn render(page: &FetchedPage, url: &str) -> Result<Option<String>, BackendCause> {
    let kind = ContentKind::detect(page.content_type.as_deref(), &page.body);
    if !kind.is_html() {
        ::log::debug!("Skipping non-HTML content from {}", url);
        return Ok(None);
    }

    let mut reader = Readability::new(page.body.as_str(), Some(url), None)
        .map_err(|e| BackendCause::Convert(e.to_string()))?;

    let article = match reader.parse() {
        Ok(article) => article,
        Err(e) => {
            ::log::debug!("Readability found no article in {}: {}", url, e);
            return Ok(None);
        }
    };

    let markdown = html::to_markdown(&article.content)
        .map_err(|e| BackendCause::Convert(e.to_string()))?;

    let tidied = text::tidy(&markdown);
    Ok((!tidied.is_empty()).then_some(tidied))
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.com/article";

    fn page(content_type: Option<&str>, body: &str) -> FetchedPage {
        FetchedPage {
            content_type: content_type.map(str::to_string),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_render_article() {
        let body = r#"<html><head><title>Story</title></head><body>
            <nav><a href="/">Home</a> <a href="/about">About</a></nav>
            <article>
              <h1>A Story</h1>
              <p>This is the first paragraph of a story that is long enough to be treated as
                 real content by the readability scoring, with commas, clauses, and detail.</p>
              <p>This is the second paragraph, which continues the story, adds more words,
                 and keeps the article comfortably above the scoring thresholds.</p>
            </article>
            <footer>Copyright footer</footer>
          </body></html>"#;

        let text = render(&page(Some("text/html"), body), URL).unwrap().unwrap();
        assert!(text.contains("This is the first paragraph of a story"));
        assert!(text.contains("This is the second paragraph"));
        assert!(!text.contains("<p>"));
    }

    #[test]
    fn test_render_plain_text_is_empty_success() {
        let rendered = render(&page(Some("text/plain"), "This is just a plain text string."), URL);
        assert!(matches!(rendered, Ok(None)));
    }

    #[test]
    fn test_name() {
        let backend = ReadabilityBackend::with_client(reqwest::Client::new());
        assert_eq!(backend.name(), "readability");
    }
}
