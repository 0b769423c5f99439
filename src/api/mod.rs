//! HTTP API server

use axum::{routing::post, Router};
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/detect-anomalies", post(handlers::detect_anomalies))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Convenience helper for the default fixed-finding deployment
pub fn create_fixed_router() -> Router {
    create_router(AppState::fixed())
}
