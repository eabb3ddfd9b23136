use crate::config::validation::parse_header;
use crate::url::ValidatorOptions;
use crate::ConfigResult;
use reqwest::header::HeaderMap;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Main configuration structure for Pagecrawl
///
/// Every section is optional; missing sections and keys fall back to their
/// defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub client: ClientConfig,
    pub validator: ValidatorConfig,
    pub output: OutputConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Total time allowed for one request chain, including the body (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Time allowed to establish a connection (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// Maximum number of redirects followed before giving up
    #[serde(rename = "max-redirects")]
    pub max_redirects: usize,

    /// Extra headers sent with every request
    pub headers: BTreeMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("pagecrawl/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            max_redirects: 10,
            headers: BTreeMap::new(),
        }
    }
}

impl ClientConfig {
    /// Builds the default header map from `headers`
    pub fn header_map(&self) -> ConfigResult<HeaderMap> {
        let mut map = HeaderMap::new();
        for (name, value) in &self.headers {
            let (name, value) = parse_header(name, value)?;
            map.insert(name, value);
        }
        Ok(map)
    }
}

/// URL validation rules
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Accepted URL schemes
    pub protocols: Vec<String>,

    /// Require a fully qualified domain with a top-level label
    #[serde(rename = "require-tld")]
    pub require_tld: bool,

    /// Accept IP literal hosts
    #[serde(rename = "allow-ip-hosts")]
    pub allow_ip_hosts: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        let defaults = ValidatorOptions::default();
        Self {
            protocols: defaults.protocols,
            require_tld: defaults.require_tld,
            allow_ip_hosts: defaults.allow_ip_hosts,
        }
    }
}

impl From<&ValidatorConfig> for ValidatorOptions {
    fn from(config: &ValidatorConfig) -> Self {
        Self {
            protocols: config.protocols.clone(),
            require_tld: config.require_tld,
            allow_ip_hosts: config.allow_ip_hosts,
            ..ValidatorOptions::default()
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Include the raw response body in the crawl output
    #[serde(rename = "include-body")]
    pub include_body: bool,

    /// Include the extracted outbound links in the crawl output
    #[serde(rename = "include-links")]
    pub include_links: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            include_body: false,
            include_links: true,
        }
    }
}
