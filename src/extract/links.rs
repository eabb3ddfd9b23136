//! Outbound link extraction

use super::document::{AttrMatch, ElementQuery, QueryableDocument, QueryableElement};
use crate::url::UrlValidator;
use std::collections::HashSet;

/// Extracts the distinct, valid `href` values of all `<a>` elements
///
/// # Link Extraction Rules
///
/// **Include:**
/// - `<a href="...">` anywhere in the tree, in document order
///
/// **Exclude:**
/// - Anchors inside HTML comments
/// - Hrefs that fail `validator` (relative links, `mailto:`, `tel:`,
///   `ftp:`, padded with whitespace)
/// - Exact duplicates of an earlier href
///
/// Values are returned as written in the markup apart from entity decoding:
/// no trimming, case folding or percent re-encoding.
///
/// # Example
///
/// ```
/// use pagecrawl::extract::{extract_urls, parse_html};
/// use pagecrawl::url::UrlValidator;
///
/// let doc = parse_html(r#"<a href="https://a.com/?x=1&amp;y=2">a</a><a href="/local">b</a>"#);
/// let urls = extract_urls(&doc, &UrlValidator::default());
/// assert_eq!(urls, vec!["https://a.com/?x=1&y=2".to_string()]);
/// ```
pub fn extract_urls<D: QueryableDocument>(doc: &D, validator: &UrlValidator) -> Vec<String> {
    let query = ElementQuery::tag("a").with_attr("href", AttrMatch::Present);

    let mut seen = HashSet::new();
    let mut urls = Vec::new();

    for anchor in doc.select(&query) {
        let Some(href) = anchor.attr("href") else {
            continue;
        };
        if validator.is_valid(href) && seen.insert(href.to_string()) {
            urls.push(href.to_string());
        }
    }

    tracing::debug!("Extracted {} distinct links", urls.len());
    urls
}
