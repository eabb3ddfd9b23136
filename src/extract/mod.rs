//! HTML extraction module
//!
//! This module parses fetched HTML once and extracts:
//! - Page title
//! - Meta description
//! - OpenGraph properties
//! - Outbound links
//!
//! Extraction runs against the [`QueryableDocument`] capability rather than
//! a concrete parser type.

mod document;
mod links;
mod metadata;

pub use document::{
    parse_html, AttrMatch, ElementQuery, HtmlDocument, HtmlElement, QueryableDocument,
    QueryableElement,
};
pub use links::extract_urls;
pub use metadata::{extract_description, extract_open_graph, extract_title, OpenGraph};

use crate::url::UrlValidator;

/// Everything extracted from a single document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageData {
    pub title: String,
    pub description: String,
    pub open_graph: OpenGraph,
    pub links: Vec<String>,
}

/// Runs every extractor against one parsed document
pub fn extract_page<D: QueryableDocument>(doc: &D, validator: &UrlValidator) -> PageData {
    PageData {
        title: extract_title(doc),
        description: extract_description(doc),
        open_graph: extract_open_graph(doc),
        links: extract_urls(doc, validator),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_page() {
        let html = r#"
            <html>
              <head>
                <title>Test title</title>
                <meta name="description" content="Test description">
                <meta property="og:title" content="Graph title">
                <meta property="og:description" content="Graph description">
              </head>
              <body>
                <h1>Hello world!</h1>
                <a href="https://www.rust-lang.org/">Rust</a>
              </body>
            </html>
        "#;
        let page = extract_page(&parse_html(html), &UrlValidator::default());

        assert_eq!(page.title, "Test title");
        assert_eq!(page.description, "Test description");
        assert_eq!(page.open_graph.get("title"), Some("Graph title"));
        assert_eq!(page.open_graph.get("description"), Some("Graph description"));
        assert_eq!(page.links, vec!["https://www.rust-lang.org/"]);
    }

    #[test]
    fn test_extract_page_from_garbage() {
        let page = extract_page(&parse_html("<<<>>> &&& </not-open>"), &UrlValidator::default());
        assert_eq!(page, PageData::default());
    }
}
