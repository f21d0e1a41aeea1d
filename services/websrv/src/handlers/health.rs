//! Health check handler

use axum::response::Json;
use serde_json::{json, Value};

use crate::APP_NAME;

/// Health check endpoint for monitoring.
///
/// @route GET /health
/// @output fixed JSON object, status 200
/// @side-effects None (read-only operation)
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "app": APP_NAME,
    }))
}
