//! HTTP fetcher implementation
//!
//! This module handles the single HTTP exchange behind a crawl:
//! - Building HTTP clients from the client configuration
//! - GET requests with transparent redirect following
//! - Timing capture
//! - Error classification

use crate::config::{parse_header, ClientConfig};
use crate::url::UrlValidator;
use crate::{ConfigError, CrawlError, NetworkErrorKind};
use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{redirect::Policy, Client};
use std::time::{Duration, Instant};
use url::Url;

/// Result of a successful fetch
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// HTTP status code of the final response
    pub status: u16,

    /// Final URL after redirects
    pub final_url: Url,

    /// Response body decoded as text
    pub body: String,

    /// Wall-clock time from sending the request to reading the full body
    pub elapsed: Duration,

    /// When the request was sent
    pub started_at: DateTime<Utc>,

    /// Headers of the final response
    pub headers: HeaderMap,
}

impl FetchResponse {
    /// Elapsed time in whole milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX)
    }

    /// Content-Type header value, if present and readable
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
    }
}

/// Per-request transport options
///
/// Headers here are merged over the client's default headers, replacing
/// defaults with the same name. The target URL is never taken from here.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub headers: HeaderMap,
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header, replacing any earlier value with the same name
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, ConfigError> {
        let (name, value) = parse_header(name, value)?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Overrides the client's total timeout for this request
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The client configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(CrawlError)` - Invalid headers or client construction failure
///
/// # Example
///
/// ```
/// use pagecrawl::config::ClientConfig;
/// use pagecrawl::crawler::build_http_client;
///
/// let client = build_http_client(&ClientConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &ClientConfig) -> Result<Client, CrawlError> {
    let headers = config.header_map()?;

    Client::builder()
        .user_agent(config.user_agent.as_str())
        .default_headers(headers)
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .redirect(Policy::limited(config.max_redirects))
        .gzip(true)
        .brotli(true)
        .build()
        .map_err(CrawlError::Client)
}

/// Issues requests for validated URLs
///
/// Cloning is cheap; the underlying client is reference counted.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    validator: UrlValidator,
}

impl Fetcher {
    /// Creates a fetcher from client configuration and URL rules
    pub fn new(config: &ClientConfig, validator: UrlValidator) -> Result<Self, CrawlError> {
        Ok(Self {
            client: build_http_client(config)?,
            validator,
        })
    }

    /// Creates a fetcher around an existing client
    pub fn with_client(client: Client, validator: UrlValidator) -> Self {
        Self { client, validator }
    }

    /// The URL rules applied before every request
    pub fn validator(&self) -> &UrlValidator {
        &self.validator
    }

    /// Fetches a URL with the client defaults
    pub async fn request(&self, url: &str) -> Result<FetchResponse, CrawlError> {
        self.request_with(url, &RequestOptions::default()).await
    }

    /// Fetches a URL with extra per-request options
    ///
    /// Invalid input fails with [`CrawlError::InvalidUrl`] before anything is
    /// sent.
    pub async fn request_with(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<FetchResponse, CrawlError> {
        let target = self.validator.assert_valid(url)?;
        fetch_url(&self.client, target, options).await
    }
}

/// Fetches an already validated URL
///
/// # Request Flow
///
/// 1. Send GET request; redirects are followed by the client
/// 2. Final status >= 400 → `CrawlError::Http`
/// 3. Read the full body as text
///
/// # Error Classification
///
/// | Condition | Result |
/// |-----------|--------|
/// | HTTP 4xx / 5xx | `Http { status }` |
/// | Timeout | `Network { kind: Timeout }` |
/// | DNS failure / connection refused / TLS | `Network { kind: Connect }` |
/// | Redirect limit exceeded | `Network { kind: Redirect }` |
/// | Body read or decode failure | `Network { kind: Body }` |
///
/// Nothing is retried.
pub async fn fetch_url(
    client: &Client,
    url: Url,
    options: &RequestOptions,
) -> Result<FetchResponse, CrawlError> {
    tracing::debug!("Fetching {}", url);

    let mut request = client.get(url.clone()).headers(options.headers.clone());
    if let Some(timeout) = options.timeout {
        request = request.timeout(timeout);
    }

    let started_at = Utc::now();
    let start = Instant::now();

    let response = request
        .send()
        .await
        .map_err(|e| network_error(url.as_str(), e))?;

    let status = response.status();
    let final_url = response.url().clone();

    if final_url != url {
        tracing::debug!("Redirected {} -> {}", url, final_url);
    }

    if status.is_client_error() || status.is_server_error() {
        tracing::warn!("{} returned HTTP {}", final_url, status.as_u16());
        return Err(CrawlError::Http {
            url: final_url.to_string(),
            status: status.as_u16(),
        });
    }

    let headers = response.headers().clone();

    let body = response
        .text()
        .await
        .map_err(|e| network_error(final_url.as_str(), e))?;

    let elapsed = start.elapsed();

    tracing::debug!(
        "Fetched {} ({} bytes, HTTP {}) in {}ms",
        final_url,
        body.len(),
        status.as_u16(),
        elapsed.as_millis()
    );

    Ok(FetchResponse {
        status: status.as_u16(),
        final_url,
        body,
        elapsed,
        started_at,
        headers,
    })
}

fn network_error(url: &str, source: reqwest::Error) -> CrawlError {
    let kind = classify_error(&source);
    tracing::debug!("Network error ({}) for {}: {}", kind, url, source);
    CrawlError::Network {
        url: url.to_string(),
        kind,
        source,
    }
}

/// Maps a transport error onto a [`NetworkErrorKind`]
fn classify_error(error: &reqwest::Error) -> NetworkErrorKind {
    if error.is_timeout() {
        NetworkErrorKind::Timeout
    } else if error.is_connect() {
        NetworkErrorKind::Connect
    } else if error.is_redirect() {
        NetworkErrorKind::Redirect
    } else if error.is_body() || error.is_decode() {
        NetworkErrorKind::Body
    } else {
        NetworkErrorKind::Other
    }
}
