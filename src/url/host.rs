use url::Url;

/// Extracts the hostname from a URL
///
/// The port is never part of the result. IPv6 literals keep their
/// brackets, matching the URL `hostname` form. Domain hosts come back in
/// the parser's canonical form (lowercase, IDNA-encoded).
///
/// # Arguments
///
/// * `url` - The URL to extract the host from
///
/// # Returns
///
/// * `Some(String)` - The hostname
/// * `None` - If the URL has no host
///
/// # Examples
///
/// ```
/// use url::Url;
/// use pagecrawl::url::extract_host;
///
/// let url = Url::parse("http://www.google.com:8080/").unwrap();
/// assert_eq!(extract_host(&url), Some("www.google.com".to_string()));
///
/// let url = Url::parse("http://[::1]:3000/").unwrap();
/// assert_eq!(extract_host(&url), Some("[::1]".to_string()));
/// ```
pub fn extract_host(url: &Url) -> Option<String> {
    url.host_str().map(str::to_string)
}
