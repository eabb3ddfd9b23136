//! Pagecrawl: single-page crawl and metadata extraction
//!
//! This crate fetches one web page, follows its redirects, and extracts the
//! page title, meta description, OpenGraph properties and outbound links.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for Pagecrawl operations
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("The provided value '{0}' is not a valid URL.")]
    InvalidUrl(String),

    #[error("HTTP error {status} for {url}")]
    Http { url: String, status: u16 },

    #[error("Network error ({kind}) for {url}: {source}")]
    Network {
        url: String,
        kind: NetworkErrorKind,
        source: reqwest::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CrawlError {
    /// Returns the HTTP status code for `Http` errors
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Classification of transport-level failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkErrorKind {
    /// The request or connection timed out
    Timeout,
    /// DNS failure, connection refused, TLS handshake failure
    Connect,
    /// Redirect limit exceeded or invalid redirect target
    Redirect,
    /// The response body could not be read or decoded
    Body,
    /// Anything else reported by the transport
    Other,
}

impl std::fmt::Display for NetworkErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Timeout => "timeout",
            Self::Connect => "connect",
            Self::Redirect => "redirect",
            Self::Body => "body",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

/// Result type alias for Pagecrawl operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{Crawler, FetchResponse, Fetcher, RequestOptions};
pub use extract::{parse_html, HtmlDocument, QueryableDocument};
pub use output::CrawlOutput;
pub use crate::url::{is_valid, validate, UrlValidator, ValidatorOptions};

/// Crawls a single URL with the default configuration
///
/// Shorthand for [`Crawler::with_defaults`] followed by
/// [`Crawler::crawl`]. Invalid input fails with [`CrawlError::InvalidUrl`]
/// before any client is built.
///
/// # Example
///
/// ```no_run
/// # async fn example() -> pagecrawl::Result<()> {
/// let output = pagecrawl::crawl("https://www.rust-lang.org/").await?;
/// println!("{} -> {}", output.url.original, output.title);
/// # Ok(())
/// # }
/// ```
pub async fn crawl(url: &str) -> Result<CrawlOutput> {
    validate(url)?;
    Crawler::with_defaults()?.crawl(url).await
}
