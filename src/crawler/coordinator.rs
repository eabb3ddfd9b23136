//! Crawl orchestration
//!
//! Validation, fetching, parsing and extraction for one URL, assembled into
//! a [`CrawlOutput`].

use crate::config::{Config, OutputConfig};
use crate::crawler::fetcher::{FetchResponse, Fetcher, RequestOptions};
use crate::extract::{extract_page, parse_html};
use crate::output::CrawlOutput;
use crate::url::{UrlValidator, ValidatorOptions};
use crate::CrawlError;
use url::Url;

/// Single-page crawler
///
/// Holds only immutable configuration and an HTTP client, so one instance
/// can serve any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct Crawler {
    fetcher: Fetcher,
    output: OutputConfig,
}

impl Crawler {
    /// Creates a new crawler
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Successfully created crawler
    /// * `Err(CrawlError)` - The HTTP client could not be built
    pub fn new(config: Config) -> Result<Self, CrawlError> {
        let validator = UrlValidator::new(ValidatorOptions::from(&config.validator));
        let fetcher = Fetcher::new(&config.client, validator)?;

        Ok(Self {
            fetcher,
            output: config.output,
        })
    }

    /// Creates a crawler with the default configuration
    pub fn with_defaults() -> Result<Self, CrawlError> {
        Self::new(Config::default())
    }

    /// Creates a crawler from an existing fetcher
    pub fn with_fetcher(fetcher: Fetcher, output: OutputConfig) -> Self {
        Self { fetcher, output }
    }

    /// Validates the URL against this crawler's rules
    pub fn validate(&self, url: &str) -> Result<Url, CrawlError> {
        self.fetcher.validator().assert_valid(url)
    }

    /// Fetches the URL without extracting anything
    pub async fn request(&self, url: &str) -> Result<FetchResponse, CrawlError> {
        self.fetcher.request(url).await
    }

    /// Crawls the URL with the client defaults
    ///
    /// See [`Crawler::crawl_with`].
    pub async fn crawl(&self, url: &str) -> Result<CrawlOutput, CrawlError> {
        self.crawl_with(url, &RequestOptions::default()).await
    }

    /// Crawls the URL and extracts its metadata
    ///
    /// # Steps
    ///
    /// 1. Validate `url` (no I/O on failure)
    /// 2. Fetch it, following redirects
    /// 3. Parse the body once
    /// 4. Extract title, description, OpenGraph and links
    /// 5. Assemble the output
    ///
    /// Fetch errors are returned unchanged; there is no partial output.
    pub async fn crawl_with(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<CrawlOutput, CrawlError> {
        self.validate(url)?;

        let response = self.fetcher.request_with(url, options).await?;

        let page = {
            let document = parse_html(&response.body);
            extract_page(&document, self.fetcher.validator())
        };

        tracing::debug!(
            "Extracted {} OpenGraph properties and {} links from {}",
            page.open_graph.len(),
            page.links.len(),
            response.final_url
        );

        Ok(CrawlOutput::assemble(url, response, page, &self.output))
    }
}
