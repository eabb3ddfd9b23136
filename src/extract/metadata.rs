//! Title, description and OpenGraph extraction

use super::document::{AttrMatch, ElementQuery, QueryableDocument, QueryableElement};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// OpenGraph properties keyed by property name without the `og:` prefix
///
/// Keys keep the order in which they first appeared in the document. A later
/// duplicate replaces the value but not the position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenGraph {
    entries: Vec<(String, String)>,
}

impl OpenGraph {
    /// Creates an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a property, overwriting the value of an existing key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns the value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in document order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for OpenGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Extracts the text of the first `<title>` element
///
/// Returns an empty string if the document has no title. The text is
/// entity-decoded by the parser and returned untrimmed.
pub fn extract_title<D: QueryableDocument>(doc: &D) -> String {
    doc.first(&ElementQuery::tag("title"))
        .map(|title| title.text())
        .unwrap_or_default()
}

/// Extracts the `content` of the first `<meta name="description">` element
///
/// The `name` value is matched case-insensitively. Returns an empty string
/// if no such element exists or it has no `content` attribute.
pub fn extract_description<D: QueryableDocument>(doc: &D) -> String {
    let query =
        ElementQuery::tag("meta").with_attr("name", AttrMatch::EqualsIgnoreCase("description"));

    doc.first(&query)
        .and_then(|meta| meta.attr("content").map(str::to_string))
        .unwrap_or_default()
}

/// Extracts every `<meta property="og:*">` element into an [`OpenGraph`] map
///
/// The property is lowercased and stripped of its `og:` prefix to form the
/// key. A missing `content` attribute yields an empty value.
pub fn extract_open_graph<D: QueryableDocument>(doc: &D) -> OpenGraph {
    let query = ElementQuery::tag("meta").with_attr("property", AttrMatch::PrefixIgnoreCase("og:"));

    let mut og = OpenGraph::new();
    for meta in doc.select(&query) {
        let Some(property) = meta.attr("property") else {
            continue;
        };
        let property = property.to_lowercase();
        let key = property.strip_prefix("og:").unwrap_or(property.as_str());
        og.insert(key, meta.attr("content").unwrap_or(""));
    }
    og
}
