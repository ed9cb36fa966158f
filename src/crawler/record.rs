//! Request and record types shared by both scrape variants

use chrono::{DateTime, SecondsFormat, Utc};

/// One scrape invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeRequest {
    /// Absolute index URL (index variant) or a path relative to the
    /// configured base URL (single variant)
    pub url: String,

    /// Opaque label copied onto every record
    pub source_label: Option<String>,
}

impl ScrapeRequest {
    pub fn new(url: impl Into<String>, source_label: Option<String>) -> Self {
        Self {
            url: url.into(),
            source_label,
        }
    }
}

/// Text extracted from one fetched page
///
/// Records are built once per successful fetch and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    pub title: String,
    pub url: String,
    pub source: Option<String>,
    pub content: String,
    pub scraped_at: DateTime<Utc>,
}

impl DocumentRecord {
    /// Scrape date as `YYYY-MM-DD`
    pub fn scrape_date(&self) -> String {
        self.scraped_at.format("%Y-%m-%d").to_string()
    }

    /// Scrape time as an ISO-8601 timestamp with millisecond precision
    pub fn scrape_timestamp(&self) -> String {
        self.scraped_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Result of [`Scraper::scrape`](crate::crawler::Scraper::scrape)
#[derive(Debug, Clone)]
pub enum ScrapeOutcome {
    /// Records for every document that fetched successfully (index variant)
    Documents(Vec<DocumentRecord>),
    /// The single requested page
    Page(DocumentRecord),
}
