//! Compiled selectors and patterns used by link discovery and extraction

use crate::config::IndexConfig;
use crate::ConfigError;
use regex::Regex;
use scraper::Selector;

/// Selectors and heuristics parsed once at startup and shared by every request
#[derive(Debug, Clone)]
pub struct ExtractionRules {
    pub link_selector: Selector,
    pub content_selector: Selector,
    pub heading_selector: Selector,
    pub title_selector: Selector,
    pub body_selector: Selector,
    pub path_marker: String,
    pub title_suffix: Regex,
    pub untitled_fallback: String,
    pub collapse_whitespace: bool,
}

impl ExtractionRules {
    /// Compiles the index configuration
    pub fn from_config(config: &IndexConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            link_selector: parse_selector(&config.link_selector)?,
            content_selector: parse_selector(&config.content_selector)?,
            heading_selector: parse_selector(&config.heading_selector)?,
            title_selector: parse_selector("title")?,
            body_selector: parse_selector("body")?,
            path_marker: config.path_marker.clone(),
            title_suffix: Regex::new(&config.title_suffix_pattern)?,
            untitled_fallback: config.untitled_fallback.clone(),
            collapse_whitespace: config.collapse_whitespace,
        })
    }
}

fn parse_selector(selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector)
        .map_err(|e| ConfigError::InvalidSelector(format!("'{}': {:?}", selector, e)))
}
