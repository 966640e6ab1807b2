//! Extract readable text from web pages.
//!
//! Pages are converted to markdown first; if that fails the main article is
//! pulled out with a readability pass instead. Both steps failing is reported
//! as [`ExtractionError::BothFailed`].
//!
//! ```no_run
//! use web_text_extract::{Extractor, create_extractor_service};
//!
//! # async fn run() -> Result<(), web_text_extract::ExtractionError> {
//! let service = create_extractor_service()?;
//! let text = service.extract_text_from_page("https://example.com").await?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```

pub mod backends;
pub mod config;
pub mod error;
pub mod extractor;
pub mod parsers;
pub mod service;
pub mod validation;

// Re-export commonly used types for convenience
pub use backends::{Backend, MarkdownBackend, ReadabilityBackend};
pub use config::ExtractorConfig;
pub use error::{
    BackendCause, ConfigError, ExtractionError, FetchError, MarkdownExtractionError,
    ReadabilityExtractionError,
};
pub use extractor::Extractor;
pub use service::ExtractorService;
pub use validation::{is_blank, is_valid_url};

/// Create an extraction service with default settings
pub fn create_extractor_service() -> Result<ExtractorService, ExtractionError> {
    ExtractorService::new()
}
