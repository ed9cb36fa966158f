//! URL handling module
//!
//! This module resolves anchor hrefs against the page they appear on and
//! answers the host and path questions the link extractor asks.

mod domain;

use crate::{UrlError, UrlResult};
use url::Url;

pub use domain::{extract_domain, same_host};

/// Resolves an href against a base URL
///
/// Both relative (`ee_1_1.htm`, `/docs/x.htm`) and absolute forms are
/// accepted. Surrounding whitespace is ignored.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use folio_scraper::url::resolve_href;
///
/// let base = Url::parse("https://example.com/docs/index.htm").unwrap();
/// let resolved = resolve_href(&base, "ee_1_1.htm").unwrap();
/// assert_eq!(resolved.as_str(), "https://example.com/docs/ee_1_1.htm");
/// ```
pub fn resolve_href(base: &Url, href: &str) -> UrlResult<Url> {
    let href = href.trim();
    base.join(href).map_err(|source| UrlError::Resolve {
        href: href.to_string(),
        source,
    })
}

/// Parses an absolute http(s) URL
pub fn parse_absolute(raw: &str) -> UrlResult<Url> {
    let url = Url::parse(raw.trim()).map_err(|source| UrlError::Resolve {
        href: raw.to_string(),
        source,
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost(raw.to_string()));
    }

    Ok(url)
}

/// Returns true if the URL's path contains the document marker
pub fn path_matches(url: &Url, marker: &str) -> bool {
    url.path().contains(marker)
}
