use crate::config::types::{ClientConfig, Config, ValidatorConfig};
use crate::ConfigError;
use reqwest::header::{HeaderName, HeaderValue};

/// Upper bound accepted for `max-redirects`
const MAX_REDIRECT_LIMIT: usize = 50;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_client_config(&config.client)?;
    validate_validator_config(&config.validator)?;
    Ok(())
}

/// Validates HTTP client configuration
fn validate_client_config(config: &ClientConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    HeaderValue::from_str(&config.user_agent).map_err(|_| {
        ConfigError::InvalidHeader(format!(
            "user_agent is not a valid header value: '{}'",
            config.user_agent
        ))
    })?;

    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "timeout_secs must be >= 1".to_string(),
        ));
    }

    if config.connect_timeout_secs == 0 || config.connect_timeout_secs > config.timeout_secs {
        return Err(ConfigError::Validation(format!(
            "connect_timeout_secs must be between 1 and timeout_secs ({}), got {}",
            config.timeout_secs, config.connect_timeout_secs
        )));
    }

    if config.max_redirects < 1 || config.max_redirects > MAX_REDIRECT_LIMIT {
        return Err(ConfigError::Validation(format!(
            "max_redirects must be between 1 and {}, got {}",
            MAX_REDIRECT_LIMIT, config.max_redirects
        )));
    }

    for (name, value) in &config.headers {
        parse_header(name, value)?;
    }

    Ok(())
}

/// Validates URL validator configuration
fn validate_validator_config(config: &ValidatorConfig) -> Result<(), ConfigError> {
    if config.protocols.is_empty() {
        return Err(ConfigError::Validation(
            "protocols must list at least one scheme".to_string(),
        ));
    }

    for protocol in &config.protocols {
        if !is_scheme_token(protocol) {
            return Err(ConfigError::Validation(format!(
                "protocol must be a URL scheme such as 'https', got '{}'",
                protocol
            )));
        }
    }

    Ok(())
}

/// Scheme grammar: ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
fn is_scheme_token(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

/// Parses a header name and value
///
/// # Returns
///
/// * `Ok((HeaderName, HeaderValue))` - The parsed header
/// * `Err(ConfigError::InvalidHeader)` - Name or value is not valid HTTP
pub fn parse_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), ConfigError> {
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| ConfigError::InvalidHeader(format!("Invalid header name '{}'", name)))?;

    let header_value = HeaderValue::from_str(value).map_err(|_| {
        ConfigError::InvalidHeader(format!("Invalid value for header '{}'", name))
    })?;

    Ok((header_name, header_value))
}
