use crate::config::types::{Config, HttpConfig, IndexConfig, SingleConfig};
use crate::ConfigError;
use regex::Regex;
use scraper::Selector;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_http_config(&config.http)?;
    validate_index_config(&config.index)?;
    validate_single_config(&config.single)?;
    Ok(())
}

/// Validates outbound HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "connect_timeout_secs must be >= 1, got {}",
            config.connect_timeout_secs
        )));
    }

    Ok(())
}

/// Validates index-variant selectors, heuristics and limits
fn validate_index_config(config: &IndexConfig) -> Result<(), ConfigError> {
    validate_selector("link_selector", &config.link_selector)?;
    validate_selector("content_selector", &config.content_selector)?;
    validate_selector("heading_selector", &config.heading_selector)?;

    if config.path_marker.is_empty() {
        return Err(ConfigError::Validation(
            "path_marker cannot be empty".to_string(),
        ));
    }

    Regex::new(&config.title_suffix_pattern)?;

    if config.untitled_fallback.trim().is_empty() {
        return Err(ConfigError::Validation(
            "untitled_fallback cannot be empty".to_string(),
        ));
    }

    if let Some(limit) = config.max_concurrent_fetches {
        if limit < 1 {
            return Err(ConfigError::Validation(format!(
                "max_concurrent_fetches must be >= 1 when set, got {}",
                limit
            )));
        }
    }

    Ok(())
}

/// Validates single-page variant settings
fn validate_single_config(config: &SingleConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base_url '{}' must use http or https",
            config.base_url
        )));
    }

    if config.source_label.trim().is_empty() {
        return Err(ConfigError::Validation(
            "source_label cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Checks that a CSS selector parses
fn validate_selector(field: &str, selector: &str) -> Result<(), ConfigError> {
    if selector.trim().is_empty() {
        return Err(ConfigError::InvalidSelector(format!(
            "{} cannot be empty",
            field
        )));
    }

    Selector::parse(selector).map_err(|e| {
        ConfigError::InvalidSelector(format!("{} '{}': {:?}", field, selector, e))
    })?;

    Ok(())
}
