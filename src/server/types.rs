//! Wire shapes for `POST /scrape`

use crate::crawler::DocumentRecord;
use serde::Serialize;
use serde_json::Value;

/// Message returned when the body carries no usable `url`
pub const MISSING_URL_MESSAGE: &str = "La URL es requerida en el body";

/// Message returned when a single-page scrape fails
pub const PAGE_FAILURE_MESSAGE: &str = "Error al scrapear la página";

/// Request body fields
///
/// Parsed leniently: an empty body, invalid JSON or a non-string field all
/// read as the field being absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapeBody {
    pub url: Option<String>,
    pub fuente: Option<String>,
}

impl ScrapeBody {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let value: Value = match serde_json::from_slice(bytes) {
            Ok(value) => value,
            Err(_) => return Self::default(),
        };

        let field = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        Self {
            url: field("url").filter(|u| !u.trim().is_empty()),
            fuente: field("fuente"),
        }
    }
}

/// Index variant response
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuente: Option<String>,
    pub documentos: Vec<DocumentBody>,
}

impl IndexResponse {
    pub fn new(fuente: Option<String>, records: Vec<DocumentRecord>) -> Self {
        Self {
            fuente,
            documentos: records.into_iter().map(DocumentBody::from).collect(),
        }
    }
}

/// One document in an index variant response
#[derive(Debug, Serialize)]
pub struct DocumentBody {
    pub titulo: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuente: Option<String>,
    pub contenido: String,
    /// `YYYY-MM-DD`
    pub fecha_scrapeo: String,
}

impl From<DocumentRecord> for DocumentBody {
    fn from(record: DocumentRecord) -> Self {
        let fecha_scrapeo = record.scrape_date();
        Self {
            titulo: record.title,
            url: record.url,
            fuente: record.source,
            contenido: record.content,
            fecha_scrapeo,
        }
    }
}

/// Single variant response
#[derive(Debug, Serialize)]
pub struct PageResponse {
    pub fuente: String,
    pub titulo: String,
    pub url: String,
    pub contenido: String,
    /// Full ISO-8601 timestamp
    pub fecha_scrapeo: String,
}

impl From<DocumentRecord> for PageResponse {
    fn from(record: DocumentRecord) -> Self {
        let fecha_scrapeo = record.scrape_timestamp();
        Self {
            fuente: record.source.unwrap_or_default(),
            titulo: record.title,
            url: record.url,
            contenido: record.content,
            fecha_scrapeo,
        }
    }
}

/// Error body shared by both variants
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
