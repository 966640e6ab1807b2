use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// HTTP settings shared by both extraction backends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Accept header sent with every request
    #[serde(default = "default_accept")]
    pub accept: String,

    /// Request timeout in seconds (no timeout when unset)
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Maximum number of redirects to follow
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            accept: default_accept(),
            timeout_secs: None,
            max_redirects: default_max_redirects(),
        }
    }
}

impl ExtractorConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Build the HTTP client described by this configuration
    pub fn build_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        let mut headers = reqwest::header::HeaderMap::new();
        if let Ok(accept) = self.accept.parse::<reqwest::header::HeaderValue>() {
            headers.insert(reqwest::header::ACCEPT, accept);
        } else {
            ::log::warn!("Ignoring invalid Accept header: {}", self.accept);
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(self.user_agent.as_str())
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(self.max_redirects));

        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build()
    }
}

/// Default value for user_agent
fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Default value for accept
fn default_accept() -> String {
    "text/html,application/xhtml+xml,text/plain;q=0.9,*/*;q=0.8".to_string()
}

/// Default value for max_redirects
fn default_max_redirects() -> usize {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let config = ExtractorConfig::from_json("{}").unwrap();
        assert_eq!(config.timeout_secs, None);
        assert_eq!(config.max_redirects, 5);
        assert!(config.user_agent.starts_with("web-text-extract/"));
        assert!(config.accept.contains("text/html"));
    }

    #[test]
    fn test_overrides_from_json() {
        let json = r#"{"user_agent": "bot/1.0", "timeout_secs": 10, "max_redirects": 0}"#;
        let config = ExtractorConfig::from_json(json).unwrap();
        assert_eq!(config.user_agent, "bot/1.0");
        assert_eq!(config.timeout_secs, Some(10));
        assert_eq!(config.max_redirects, 0);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = ExtractorConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ExtractorConfig::from_file("/nonexistent/extractor.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_with_timeout_and_client() {
        let config = ExtractorConfig::default().with_timeout(3);
        assert_eq!(config.timeout_secs, Some(3));
        assert!(config.build_client().is_ok());
    }
}
