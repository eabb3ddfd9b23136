//! Output module for presenting crawl results
//!
//! This module handles:
//! - The `CrawlOutput` value returned by a crawl
//! - Rendering it as JSON or as a human-readable report

mod types;

pub use types::{CrawlOutput, PageMeta, UrlSummary};

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// Plain-text report
    Text,
}

/// Renders a crawl output in the given format
pub fn render(output: &CrawlOutput, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => render_json(output),
        OutputFormat::Text => Ok(render_text(output)),
    }
}

/// Renders a crawl output as pretty-printed JSON
pub fn render_json(output: &CrawlOutput) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(output)
}

/// Renders a crawl output as a plain-text report
pub fn render_text(output: &CrawlOutput) -> String {
    let mut report = String::new();

    report.push_str("=== Crawl Result ===\n\n");
    report.push_str(&format!("Status:      {}\n", output.status));
    report.push_str(&format!("URL:         {}\n", output.url.original));
    if output.url.redirected {
        report.push_str(&format!("Resolved:    {}\n", output.url.resolved));
    }
    report.push_str(&format!("Host:        {}\n", output.host));
    report.push_str(&format!("Time:        {}ms\n", output.time));
    report.push_str(&format!("Title:       {}\n", output.title));
    report.push_str(&format!("Description: {}\n", output.meta.description));

    report.push_str(&format!("\nOpenGraph ({}):\n", output.meta.og.len()));
    for (key, value) in output.meta.og.iter() {
        report.push_str(&format!("  {}: {}\n", key, value));
    }

    if let Some(links) = &output.links {
        report.push_str(&format!("\nLinks ({}):\n", links.len()));
        for link in links {
            report.push_str(&format!("  - {}\n", link));
        }
    }

    if let Some(body) = &output.body {
        report.push_str(&format!("\nBody ({} bytes):\n{}\n", body.len(), body));
    }

    report
}
