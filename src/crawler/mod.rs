//! Crawler module for page fetching and text extraction
//!
//! This module contains the core scraping logic, including:
//! - HTTP fetching
//! - Index parsing and candidate link discovery
//! - Title and content extraction
//! - Concurrent fan-out over discovered documents

mod coordinator;
mod extract;
mod fetcher;
mod parser;
mod record;
mod rules;

pub use coordinator::Scraper;
pub use extract::{extract_document, extract_page, ExtractedText};
pub use fetcher::{build_http_client, fetch_page};
pub use parser::{extract_candidate_links, VisitedSet};
pub use record::{DocumentRecord, ScrapeOutcome, ScrapeRequest};
pub use rules::ExtractionRules;
