//! Health check endpoints

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status (e.g., "healthy")
    pub status: String,
    /// Model availability ("loaded" or "not loaded")
    pub model_status: String,
    /// Crate version from Cargo.toml
    pub version: String,
}

/// GET /
///
/// Liveness message, also used as a quick manual check that the service is
/// reachable.
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Deepfake Audio Detection API is running" }))
}

/// GET /health
///
/// Health check endpoint for monitoring. Reports whether the model was
/// loaded at startup.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let model_status = if state.detector.is_some() {
        "loaded"
    } else {
        "not loaded"
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        model_status: model_status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
