use crate::backends::{Backend, MarkdownBackend, ReadabilityBackend};
use crate::config::ExtractorConfig;
use crate::error::ExtractionError;
use crate::extractor::Extractor;
use crate::validation::{is_blank, is_valid_url};
use async_trait::async_trait;

/// Text extraction with a fixed two-step fallback
///
/// The primary backend is always tried first. The fallback backend runs only
/// when the primary fails with its own declared error, and if that fails too
/// the call ends with [`ExtractionError::BothFailed`].
pub struct ExtractorService<P = MarkdownBackend, F = ReadabilityBackend> {
    primary: P,
    fallback: F,
}

impl ExtractorService {
    /// Create a service with default configuration
    pub fn new() -> Result<Self, ExtractionError> {
        Self::with_config(&ExtractorConfig::default())
    }

    /// Create a service whose backends share one client built from `config`
    pub fn with_config(config: &ExtractorConfig) -> Result<Self, ExtractionError> {
        let client = config.build_client().map_err(ExtractionError::Client)?;

        Ok(Self::with_backends(
            MarkdownBackend::with_client(client.clone()),
            ReadabilityBackend::with_client(client),
        ))
    }
}

impl<P: Backend, F: Backend> ExtractorService<P, F> {
    /// Create a service from explicit backends
    pub fn with_backends(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    /// Checks the URL before any backend is touched
    fn validate(url: &str) -> Result<(), ExtractionError> {
        if is_blank(Some(url)) {
            ::log::debug!("Empty or blank URL provided");
            return Err(ExtractionError::UrlInvalid(
                "URL cannot be empty or blank".to_string(),
            ));
        }

        if !is_valid_url(Some(url)) {
            ::log::debug!("Invalid URL provided: {}", url);
            return Err(ExtractionError::UrlInvalid(format!("Invalid URL: {url}")));
        }

        Ok(())
    }
}

#[async_trait]
impl<P: Backend, F: Backend> Extractor for ExtractorService<P, F> {
    async fn extract_text_from_page(&self, url: &str) -> Result<String, ExtractionError> {
        Self::validate(url)?;

        ::log::debug!(
            "Attempting to extract text from {} using {}",
            url,
            self.primary.name()
        );
        match self.primary.extract(url).await {
            Ok(text) => return Ok(text),
            Err(e) => ::log::info!(
                "{} extraction failed for {}: {}. Falling back to {}",
                self.primary.name(),
                url,
                e,
                self.fallback.name()
            ),
        }

        ::log::debug!(
            "Attempting to extract text from {} using {}",
            url,
            self.fallback.name()
        );
        match self.fallback.extract(url).await {
            Ok(text) => return Ok(text),
            Err(e) => ::log::warn!(
                "{} extraction failed for {}: {}. No more fallback options available",
                self.fallback.name(),
                url,
                e
            ),
        }

        ::log::error!(
            "Failed to extract text from {} using both {} and {}",
            url,
            self.primary.name(),
            self.fallback.name()
        );
        Err(ExtractionError::BothFailed(url.to_string()))
    }
}
