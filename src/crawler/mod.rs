//! Crawler module for fetching and processing a single page
//!
//! This module contains the crawl pipeline:
//! - HTTP fetching with redirect following and timing
//! - Orchestration of validation, fetching and extraction

mod coordinator;
mod fetcher;

pub use coordinator::Crawler;
pub use fetcher::{build_http_client, fetch_url, FetchResponse, Fetcher, RequestOptions};
