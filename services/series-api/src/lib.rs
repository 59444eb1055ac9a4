//! Series Lookup API
//!
//! Normalizes a user-supplied show title, looks it up on TVmaze and returns
//! a simplified summary.

pub mod config;
pub mod error;
pub mod normalize;
pub mod routes;
pub mod summary;
pub mod tvmaze;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use config::Config;
pub use error::LookupError;
pub use normalize::{normalize, NormalizedTitle};
pub use summary::{ShowRecord, ShowSummary};
pub use tvmaze::TvMazeClient;

#[derive(Clone)]
pub struct AppState {
    pub tvmaze: Arc<TvMazeClient>,
}

impl AppState {
    pub fn new(tvmaze: TvMazeClient) -> Self {
        Self {
            tvmaze: Arc::new(tvmaze),
        }
    }
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health_check))
        .route("/api/serie/:nombre", get(routes::get_serie))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
