use reqwest::StatusCode;

/// Root error for every failure the extractor can report
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    /// The URL failed validation before any backend was touched
    #[error("{0}")]
    UrlInvalid(String),

    /// The markdown backend could not produce text
    #[error(transparent)]
    Markdown(#[from] MarkdownExtractionError),

    /// The readability backend could not produce text
    #[error(transparent)]
    Readability(#[from] ReadabilityExtractionError),

    /// Both backends failed for the same URL
    #[error("Failed to extract text from {0} using both markdown and readability")]
    BothFailed(String),

    /// The HTTP client could not be built
    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Failure of the markdown backend, wrapping the underlying cause
#[derive(Debug, thiserror::Error)]
#[error("markdown extraction failed for {url}: {source}")]
pub struct MarkdownExtractionError {
    pub url: String,
    #[source]
    pub source: BackendCause,
}

/// Failure of the readability backend, wrapping the underlying cause
#[derive(Debug, thiserror::Error)]
#[error("readability extraction failed for {url}: {source}")]
pub struct ReadabilityExtractionError {
    pub url: String,
    #[source]
    pub source: BackendCause,
}

/// What went wrong inside a backend
#[derive(Debug, thiserror::Error)]
pub enum BackendCause {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The fetched document could not be converted to text
    #[error("conversion failed: {0}")]
    Convert(String),
}

/// Errors raised while fetching a page over HTTP
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(StatusCode),

    /// The server answered with a success status but no content
    #[error("empty response body (HTTP {0})")]
    EmptyBody(StatusCode),
}

/// Errors raised while loading an [`ExtractorConfig`](crate::config::ExtractorConfig)
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}
