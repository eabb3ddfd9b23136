//! Queryable document abstraction and its scraper-backed implementation
//!
//! Extraction only needs tag selection with an optional attribute test, so
//! that is all the capability traits expose. `HtmlDocument` adapts
//! `scraper::Html` to them.

use scraper::{ElementRef, Html, Selector};

/// How an attribute value must look for an element to match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrMatch<'q> {
    /// The attribute exists, whatever its value
    Present,
    /// The value equals the given text, ASCII case-insensitively
    EqualsIgnoreCase(&'q str),
    /// The value starts with the given text, ASCII case-insensitively
    PrefixIgnoreCase(&'q str),
}

impl AttrMatch<'_> {
    /// Tests an attribute value against this matcher
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::Present => true,
            Self::EqualsIgnoreCase(expected) => value.eq_ignore_ascii_case(expected),
            Self::PrefixIgnoreCase(prefix) => value
                .get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix)),
        }
    }
}

/// Element selection: a tag name plus an optional attribute test
///
/// Tag and attribute names are matched ASCII case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementQuery<'q> {
    tag: &'q str,
    attr: Option<(&'q str, AttrMatch<'q>)>,
}

impl<'q> ElementQuery<'q> {
    /// Selects every element with the given tag name
    pub fn tag(tag: &'q str) -> Self {
        Self { tag, attr: None }
    }

    /// Narrows the query to elements whose attribute satisfies `matcher`
    pub fn with_attr(mut self, name: &'q str, matcher: AttrMatch<'q>) -> Self {
        self.attr = Some((name, matcher));
        self
    }

    /// The tag name this query selects
    pub fn tag_name(&self) -> &'q str {
        self.tag
    }

    /// Tests an element's attributes against this query
    ///
    /// The tag name is left to the document implementation.
    pub fn matches<E: QueryableElement>(&self, element: &E) -> bool {
        match &self.attr {
            None => true,
            Some((name, matcher)) => element.attr(name).is_some_and(|v| matcher.matches(v)),
        }
    }
}

/// Read access to a single element
pub trait QueryableElement {
    /// Returns an attribute value with entities already decoded
    fn attr(&self, name: &str) -> Option<&str>;

    /// Returns the concatenated, entity-decoded text content
    fn text(&self) -> String;
}

/// A parsed document that supports element selection
///
/// Elements inside HTML comments are never returned.
pub trait QueryableDocument {
    type Element<'a>: QueryableElement
    where
        Self: 'a;

    /// Returns every matching element in document order
    fn select<'a>(&'a self, query: &ElementQuery<'_>) -> Vec<Self::Element<'a>>;

    /// Returns the first matching element in document order
    fn first<'a>(&'a self, query: &ElementQuery<'_>) -> Option<Self::Element<'a>> {
        self.select(query).into_iter().next()
    }
}

/// An HTML document parsed with `scraper`
///
/// Parsing follows the HTML5 algorithm, so malformed markup (missing quotes,
/// mixed-case tags, stray end tags) produces a usable tree instead of an
/// error.
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parses a full HTML document
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }
}

/// An element of an [`HtmlDocument`]
#[derive(Debug, Clone, Copy)]
pub struct HtmlElement<'a>(ElementRef<'a>);

impl QueryableElement for HtmlElement<'_> {
    fn attr(&self, name: &str) -> Option<&str> {
        // html5ever lowercases attribute names, but stay tolerant
        self.0
            .value()
            .attrs()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    fn text(&self) -> String {
        self.0.text().collect()
    }
}

impl QueryableDocument for HtmlDocument {
    type Element<'a> = HtmlElement<'a>;

    fn select<'a>(&'a self, query: &ElementQuery<'_>) -> Vec<HtmlElement<'a>> {
        let Ok(selector) = Selector::parse(&query.tag_name().to_ascii_lowercase()) else {
            tracing::debug!("Unusable tag name in query: {}", query.tag_name());
            return Vec::new();
        };

        self.html
            .select(&selector)
            .map(HtmlElement)
            .filter(|element| query.matches(element))
            .collect()
    }
}

/// Parses raw HTML into a queryable document
///
/// # Example
///
/// ```
/// use pagecrawl::extract::{extract_title, parse_html};
///
/// let doc = parse_html("<TITLE>Title here&excl;</title>");
/// assert_eq!(extract_title(&doc), "Title here!");
/// ```
pub fn parse_html(html: &str) -> HtmlDocument {
    HtmlDocument::parse(html)
}
