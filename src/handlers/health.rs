//! # Health Check Handler

use axum::Json;
use serde_json::{json, Value};

/// Health check endpoint
///
/// ## Route
/// GET /health
///
/// Always returns 200 OK while the server is up.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "passkey-ceremony-demo"
    }))
}
