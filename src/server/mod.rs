//! HTTP surface
//!
//! A single route, `POST /scrape`, running whichever variant the server was
//! configured with.

mod handlers;
mod types;

pub use handlers::{scrape_handler, ApiError};
pub use types::{
    DocumentBody, ErrorBody, IndexResponse, PageResponse, ScrapeBody, MISSING_URL_MESSAGE,
    PAGE_FAILURE_MESSAGE,
};

use crate::config::{Config, ScrapeMode};
use crate::crawler::Scraper;
use crate::ScrapeError;
use axum::routing::post;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Shared handler state
#[derive(Debug, Clone)]
pub struct AppState {
    pub scraper: Scraper,
    pub mode: ScrapeMode,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, ScrapeError> {
        Ok(Self {
            scraper: Scraper::new(config)?,
            mode: config.server.mode,
        })
    }
}

/// Builds the router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/scrape", post(scrape_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl-C
pub async fn serve(config: &Config) -> Result<(), ScrapeError> {
    let state = AppState::new(config)?;
    let app = create_app(state);

    let listener =
        tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    tracing::info!(
        "Scraping server listening on {} ({:?} mode)",
        listener.local_addr()?,
        config.server.mode
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
