//! Route configuration
//!
//! Central route definition for the web service endpoints.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::handlers::{calculator_page, health_check};

/// Build the service router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(calculator_page))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
