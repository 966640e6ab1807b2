use clap::Parser;
use std::path::PathBuf;
use web_text_extract::{ConfigError, ExtractorConfig};

#[derive(Parser, Debug)]
#[command(name = "web-text-extract")]
#[command(about = "Extract clean text content from web pages")]
#[command(version)]
pub struct Args {
    /// HTTP/HTTPS URL to extract text from
    pub url: String,

    /// Print nothing and exit 1 instead of failing when extraction errors
    #[arg(long)]
    pub safe: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// JSON file with HTTP client settings
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Build the extractor configuration, letting flags override the file
    pub fn extractor_config(&self) -> Result<ExtractorConfig, ConfigError> {
        let config = match &self.config {
            Some(path) => ExtractorConfig::from_file(path)?,
            None => ExtractorConfig::default(),
        };

        Ok(match self.timeout {
            Some(secs) => config.with_timeout(secs),
            None => config,
        })
    }
}
