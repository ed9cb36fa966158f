//! `POST /scrape` handler

use crate::config::ScrapeMode;
use crate::crawler::{ScrapeOutcome, ScrapeRequest};
use crate::server::types::{
    ErrorBody, IndexResponse, PageResponse, ScrapeBody, MISSING_URL_MESSAGE, PAGE_FAILURE_MESSAGE,
};
use crate::server::AppState;
use crate::ScrapeError;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{debug, error, warn};

/// Error response carrying a JSON body
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    fn missing_url() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorBody {
                error: MISSING_URL_MESSAGE.to_string(),
                details: None,
            },
        }
    }

    fn scrape_failed(mode: ScrapeMode, err: &ScrapeError) -> Self {
        let body = match mode {
            ScrapeMode::Index => ErrorBody {
                error: err.to_string(),
                details: None,
            },
            ScrapeMode::Single => ErrorBody {
                error: PAGE_FAILURE_MESSAGE.to_string(),
                details: Some(err.to_string()),
            },
        };

        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// POST /scrape
///
/// # Request Body
/// ```json
/// { "url": "https://example.com/docs/index.htm", "fuente": "LABEL" }
/// ```
/// In single mode `url` is a path below the configured base URL and `fuente`
/// is ignored.
///
/// # Errors
/// - 400 Bad Request: missing, empty or non-string `url`
/// - 500 Internal Server Error: the index (or single page) could not be fetched
pub async fn scrape_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let payload = ScrapeBody::from_bytes(&body);
    let Some(url) = payload.url else {
        warn!("Scrape request rejected: no url in body");
        return Err(ApiError::missing_url());
    };

    debug!("Scrape request ({:?}): {}", state.mode, url);
    let request = ScrapeRequest::new(url, payload.fuente);

    match state.scraper.scrape(state.mode, &request).await {
        Ok(ScrapeOutcome::Documents(records)) => {
            Ok(Json(IndexResponse::new(request.source_label, records)).into_response())
        }
        Ok(ScrapeOutcome::Page(record)) => Ok(Json(PageResponse::from(record)).into_response()),
        Err(e) => {
            error!("Scrape of {} failed: {}", request.url, e);
            Err(ApiError::scrape_failed(state.mode, &e))
        }
    }
}
