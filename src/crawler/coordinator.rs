//! Scrape coordinator - ties fetching, link discovery and extraction together
//!
//! The index variant fetches the index page, extracts candidate links and
//! fans out one fetch per candidate. Every document fetch runs concurrently
//! on the calling task; a failed document is logged and dropped without
//! affecting its siblings. The single variant fetches one page below the
//! configured base URL and extracts it directly.

use crate::config::{Config, ScrapeMode, SingleConfig};
use crate::crawler::extract::{extract_document, extract_page};
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::parser::extract_candidate_links;
use crate::crawler::record::{DocumentRecord, ScrapeOutcome, ScrapeRequest};
use crate::crawler::rules::ExtractionRules;
use crate::url::parse_absolute;
use crate::{ScrapeError, UrlError};
use chrono::Utc;
use futures::future::join_all;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::sync::Arc;
use url::Url;

/// Configured scraper, cheap to clone and shared across requests
#[derive(Debug, Clone)]
pub struct Scraper {
    client: Client,
    rules: Arc<ExtractionRules>,
    single: Arc<SingleConfig>,
    max_concurrent_fetches: Option<usize>,
}

impl Scraper {
    /// Creates a scraper with its own HTTP client
    ///
    /// # Returns
    ///
    /// * `Ok(Scraper)` - Selectors compiled and client built
    /// * `Err(ScrapeError)` - Invalid selector or pattern, or client build failure
    pub fn new(config: &Config) -> Result<Self, ScrapeError> {
        let client = build_http_client(&config.http)?;
        Self::with_client(config, client)
    }

    /// Creates a scraper around an existing client
    pub fn with_client(config: &Config, client: Client) -> Result<Self, ScrapeError> {
        Ok(Self {
            client,
            rules: Arc::new(ExtractionRules::from_config(&config.index)?),
            single: Arc::new(config.single.clone()),
            max_concurrent_fetches: config.index.max_concurrent_fetches,
        })
    }

    /// Runs the requested variant
    pub async fn scrape(
        &self,
        mode: ScrapeMode,
        request: &ScrapeRequest,
    ) -> Result<ScrapeOutcome, ScrapeError> {
        match mode {
            ScrapeMode::Index => Ok(ScrapeOutcome::Documents(self.scrape_index(request).await?)),
            ScrapeMode::Single => Ok(ScrapeOutcome::Page(self.scrape_page(&request.url).await?)),
        }
    }

    /// Scrapes an index page and every document it links to
    ///
    /// Only a failure to fetch the index itself is returned as an error.
    /// Documents that fail are left out of the result, so its length is at
    /// most the number of candidate links.
    pub async fn scrape_index(
        &self,
        request: &ScrapeRequest,
    ) -> Result<Vec<DocumentRecord>, ScrapeError> {
        let index_url = parse_absolute(&request.url)?;

        tracing::info!("Visiting index page: {}", index_url);
        let body = fetch_page(&self.client, &index_url).await?;

        let candidates = extract_candidate_links(&body, &index_url, &self.rules);
        tracing::info!("Found {} document URLs to visit", candidates.len());

        let documents = self
            .fetch_documents(candidates, request.source_label.as_deref())
            .await;
        tracing::info!("Finished scraping documents: {} processed", documents.len());

        Ok(documents)
    }

    /// Scrapes a single page addressed relative to the configured base URL
    pub async fn scrape_page(&self, path: &str) -> Result<DocumentRecord, ScrapeError> {
        let url = self.page_url(path)?;

        tracing::info!("Scraping page: {}", url);
        let body = fetch_page(&self.client, &url).await?;
        let extracted = extract_page(&body, &self.rules);

        Ok(DocumentRecord {
            title: extracted.title,
            url: url.to_string(),
            source: Some(self.single.source_label.clone()),
            content: extracted.content.unwrap_or_default(),
            scraped_at: Utc::now(),
        })
    }

    /// Appends a request path to the configured base URL
    ///
    /// Leading slashes on the path are dropped. A path whose dot segments
    /// resolve above the base directory, or onto another host, is rejected.
    pub fn page_url(&self, path: &str) -> Result<Url, ScrapeError> {
        let base = self.single.base_url.trim_end_matches('/');
        let path = path.trim().trim_start_matches('/');
        let url = parse_absolute(&format!("{}/{}", base, path))?;

        let base_dir = parse_absolute(&format!("{}/", base))?;
        if url.origin() != base_dir.origin() || !url.path().starts_with(base_dir.path()) {
            return Err(UrlError::OutsideBase {
                path: path.to_string(),
                base: base_dir.to_string(),
            }
            .into());
        }

        Ok(url)
    }

    /// Fetches every candidate concurrently and keeps the successes
    ///
    /// Without a cap all fetches are in flight at once and records come back
    /// in candidate order; with a cap they come back in completion order.
    async fn fetch_documents(
        &self,
        candidates: Vec<Url>,
        source: Option<&str>,
    ) -> Vec<DocumentRecord> {
        let fetches = candidates
            .into_iter()
            .map(|url| self.scrape_document_logged(url, source));

        let results: Vec<Option<DocumentRecord>> = match self.max_concurrent_fetches {
            None => join_all(fetches).await,
            Some(limit) => stream::iter(fetches).buffer_unordered(limit).collect().await,
        };

        results.into_iter().flatten().collect()
    }

    async fn scrape_document_logged(
        &self,
        url: Url,
        source: Option<&str>,
    ) -> Option<DocumentRecord> {
        match self.scrape_document(&url, source).await {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::error!("Error scraping document {}: {}", url, e);
                None
            }
        }
    }

    async fn scrape_document(
        &self,
        url: &Url,
        source: Option<&str>,
    ) -> Result<DocumentRecord, ScrapeError> {
        tracing::debug!("Visiting document: {}", url);
        let body = fetch_page(&self.client, url).await?;
        let extracted = extract_document(&body, &self.rules);

        let content = match extracted.content {
            Some(content) => {
                tracing::debug!(
                    "Extracted text from {} (start): \"{}...\"",
                    url,
                    content.chars().take(100).collect::<String>()
                );
                content
            }
            None => {
                tracing::warn!("No content container found in {}", url);
                String::new()
            }
        };

        Ok(DocumentRecord {
            title: extracted.title,
            url: url.to_string(),
            source: source.map(str::to_string),
            content,
            scraped_at: Utc::now(),
        })
    }
}
