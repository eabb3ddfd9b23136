//! Crawl output types

use crate::config::OutputConfig;
use crate::crawler::FetchResponse;
use crate::extract::{OpenGraph, PageData};
use crate::url::extract_host;
use serde::Serialize;

/// The result of crawling one URL
#[derive(Debug, Clone, Serialize)]
pub struct CrawlOutput {
    /// HTTP status of the final response
    pub status: u16,

    /// Requested and resolved URLs
    pub url: UrlSummary,

    /// Hostname of the resolved URL, without port
    pub host: String,

    /// Elapsed request time in milliseconds
    pub time: u64,

    /// Page title
    pub title: String,

    /// Description and OpenGraph properties
    pub meta: PageMeta,

    /// Distinct outbound links (absent when disabled)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<String>>,

    /// Raw response body (only when enabled)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Requested versus resolved URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlSummary {
    /// The URL exactly as given
    pub original: String,

    /// The URL after redirects
    pub resolved: String,

    /// True when `original` and `resolved` differ as strings
    pub redirected: bool,
}

impl UrlSummary {
    pub fn new(original: &str, resolved: &str) -> Self {
        Self {
            original: original.to_string(),
            resolved: resolved.to_string(),
            redirected: original != resolved,
        }
    }
}

/// Page metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub description: String,
    pub og: OpenGraph,
}

impl CrawlOutput {
    /// Builds the output from a fetch and the data extracted from it
    ///
    /// `redirected` compares strings, so a parser-added trailing slash
    /// counts as a redirect.
    pub fn assemble(
        original: &str,
        response: FetchResponse,
        page: PageData,
        config: &OutputConfig,
    ) -> Self {
        let time = response.elapsed_ms();
        let host = extract_host(&response.final_url).unwrap_or_default();
        let url = UrlSummary::new(original, response.final_url.as_str());

        Self {
            status: response.status,
            url,
            host,
            time,
            title: page.title,
            meta: PageMeta {
                description: page.description,
                og: page.open_graph,
            },
            links: config.include_links.then_some(page.links),
            body: config.include_body.then_some(response.body),
        }
    }
}
