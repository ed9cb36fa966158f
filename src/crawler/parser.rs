//! Index page parser
//!
//! Finds the document links listed on an index page. An anchor becomes a
//! candidate when its resolved URL:
//! - has the same hostname as the index page
//! - is not the index page itself
//! - has the configured marker in its path
//! - has not already been accepted for this request

use crate::crawler::rules::ExtractionRules;
use crate::url::{path_matches, resolve_href, same_host};
use scraper::Html;
use std::collections::HashSet;
use url::Url;

/// Request-scoped set of URLs already accepted (or the index itself)
#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: HashSet<String>,
}

impl VisitedSet {
    /// Creates a set that already contains the index URL
    pub fn seeded(index_url: &Url) -> Self {
        let mut set = Self::default();
        set.insert(index_url);
        set
    }

    /// Records a URL; returns false if it was already present
    pub fn insert(&mut self, url: &Url) -> bool {
        self.urls.insert(url.as_str().to_string())
    }

    pub fn contains(&self, url: &Url) -> bool {
        self.urls.contains(url.as_str())
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

/// Extracts candidate document links from index page HTML
///
/// Links come back in document order without duplicates. Hrefs that fail to
/// resolve are logged and skipped; a page with no matching anchors yields an
/// empty list.
///
/// # Example
///
/// ```
/// use folio_scraper::config::IndexConfig;
/// use folio_scraper::crawler::{extract_candidate_links, ExtractionRules};
/// use url::Url;
///
/// let rules = ExtractionRules::from_config(&IndexConfig::default()).unwrap();
/// let html = r#"<div class="panel-lista-opciones-nivel-02">
///     <a href="ee_1.htm">Libro 1</a>
///     <a href="https://other.org/docs/x.htm">Fuera</a>
/// </div>"#;
/// let index = Url::parse("https://example.com/docs/index.htm").unwrap();
///
/// let links = extract_candidate_links(html, &index, &rules);
/// assert_eq!(links.len(), 1);
/// assert_eq!(links[0].as_str(), "https://example.com/docs/ee_1.htm");
/// ```
pub fn extract_candidate_links(html: &str, index_url: &Url, rules: &ExtractionRules) -> Vec<Url> {
    let document = Html::parse_document(html);
    let mut visited = VisitedSet::seeded(index_url);
    let mut links = Vec::new();

    for element in document.select(&rules.link_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        let candidate = match resolve_href(index_url, href) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Error processing index link '{}': {}", href, e);
                continue;
            }
        };

        if !is_document_link(&candidate, index_url, &rules.path_marker) {
            continue;
        }

        if visited.insert(&candidate) {
            tracing::debug!("Document link found: {}", candidate);
            links.push(candidate);
        }
    }

    links
}

/// Returns true if a resolved link points at a document page of this index
fn is_document_link(candidate: &Url, index_url: &Url, marker: &str) -> bool {
    same_host(candidate, index_url) && candidate != index_url && path_matches(candidate, marker)
}
