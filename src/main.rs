use clap::Parser;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::process::ExitCode;
use web_text_extract::{ExtractionError, Extractor, ExtractorService};

mod args;
use args::Args;

/// Text was extracted and printed
const EXIT_SUCCESS: u8 = 0;
/// Extraction succeeded but produced no text
const EXIT_NO_CONTENT: u8 = 1;
const EXIT_INVALID_URL: u8 = 2;
const EXIT_EXTRACTION_FAILED: u8 = 3;
const EXIT_UNEXPECTED: u8 = 4;

#[tokio::main]
async fn main() -> ExitCode {
    // Parse command-line arguments
    let args = Args::parse();

    init_logging(args.verbose);
    ::log::debug!("Starting extraction for URL: {}", args.url);

    let config = match args.extractor_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Unexpected error - {e}");
            return ExitCode::from(EXIT_UNEXPECTED);
        }
    };

    let service = match ExtractorService::with_config(&config) {
        Ok(service) => service,
        Err(e) => {
            eprintln!("Error: Unexpected error - {e}");
            return ExitCode::from(EXIT_UNEXPECTED);
        }
    };

    let result = if args.safe {
        Ok(service.extract_text_from_page_safe(&args.url).await)
    } else {
        match AssertUnwindSafe(service.extract_text_from_page(&args.url))
            .catch_unwind()
            .await
        {
            Ok(result) => result,
            Err(_) => {
                eprintln!("Error: Unexpected error - extractor panicked");
                return ExitCode::from(EXIT_UNEXPECTED);
            }
        }
    };

    match result {
        Ok(text) if !text.is_empty() => {
            println!("{text}");
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(_) => {
            eprintln!("No text content found");
            ExitCode::from(EXIT_NO_CONTENT)
        }
        Err(e) => {
            let code = exit_code(&e);
            match code {
                EXIT_INVALID_URL => eprintln!("Error: Invalid URL - {e}"),
                EXIT_EXTRACTION_FAILED => eprintln!("Error: Text extraction failed - {e}"),
                _ => eprintln!("Error: Unexpected error - {e}"),
            }
            ExitCode::from(code)
        }
    }
}

/// Configure logging once for the whole process
///
/// `--verbose` enables debug output; otherwise only warnings and errors are
/// shown. `RUST_LOG` still takes precedence when set.
fn init_logging(verbose: bool) {
    let level = if verbose {
        ::log::LevelFilter::Debug
    } else {
        ::log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

/// Maps an extraction error to the process exit code
fn exit_code(error: &ExtractionError) -> u8 {
    match error {
        ExtractionError::UrlInvalid(_) => EXIT_INVALID_URL,
        ExtractionError::Markdown(_)
        | ExtractionError::Readability(_)
        | ExtractionError::BothFailed(_) => EXIT_EXTRACTION_FAILED,
        ExtractionError::Client(_) => EXIT_UNEXPECTED,
    }
}
