//! URL handling module for Pagecrawl
//!
//! This module provides URL validation and host extraction.

mod host;
mod validator;

use crate::CrawlError;
use std::sync::OnceLock;
use url::Url;

// Re-export main types and functions
pub use host::extract_host;
pub use validator::{UrlValidator, ValidatorOptions, DEFAULT_MAX_LENGTH, DEFAULT_PROTOCOLS};

fn default_validator() -> &'static UrlValidator {
    static DEFAULT: OnceLock<UrlValidator> = OnceLock::new();
    DEFAULT.get_or_init(UrlValidator::default)
}

/// Determines if the URL is valid under the default rules
///
/// # Examples
///
/// ```
/// use pagecrawl::url::is_valid;
///
/// assert!(is_valid("https://www.google.com/"));
/// assert!(!is_valid("ftp://google.com"));
/// assert!(!is_valid(""));
/// ```
pub fn is_valid(candidate: impl AsRef<str>) -> bool {
    default_validator().is_valid(candidate)
}

/// Validates the URL under the default rules
///
/// # Returns
///
/// * `Ok(Url)` - The parsed URL
/// * `Err(CrawlError::InvalidUrl)` - The value is not a valid URL
pub fn validate(candidate: impl AsRef<str>) -> Result<Url, CrawlError> {
    default_validator().assert_valid(candidate)
}
