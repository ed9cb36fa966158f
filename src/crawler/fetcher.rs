//! HTTP fetcher implementation
//!
//! This module handles all outbound HTTP requests:
//! - Building the shared client from `[http]` configuration
//! - GET requests for index and document pages
//! - Error classification (transport, non-success status, body decode)
//!
//! There is no retry logic. Redirects are followed by the client.

use crate::config::HttpConfig;
use crate::ScrapeError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use folio_scraper::config::HttpConfig;
/// use folio_scraper::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page and returns its body as text
///
/// # Errors
///
/// | Condition | Error |
/// |-----------|-------|
/// | DNS, connect, timeout | `ScrapeError::Http` |
/// | Non-2xx status | `ScrapeError::Status` |
/// | Body not readable as text | `ScrapeError::Body` |
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String, ScrapeError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| ScrapeError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| ScrapeError::Body {
        url: url.to_string(),
        source,
    })
}
