//! spoofcheck-api library interface
//!
//! Exposes the router and application state so integration tests can drive
//! the service without binding a socket.

pub mod api;
pub mod error;
pub mod startup;

pub use crate::error::{ApiError, ApiResult};

use axum::extract::DefaultBodyLimit;
use axum::Router;
use spoofcheck_core::SpoofDetector;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Largest upload accepted by the predict endpoint
pub const MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;

/// Application state shared across handlers
///
/// The detector is loaded once at startup and never mutated afterwards, so
/// handlers share it through a plain `Arc` with no locking.
#[derive(Clone)]
pub struct AppState {
    /// Loaded detection pipeline; `None` means the model is unavailable
    pub detector: Option<Arc<SpoofDetector>>,
}

impl AppState {
    pub fn new(detector: Option<Arc<SpoofDetector>>) -> Self {
        Self { detector }
    }
}

/// Build application router
///
/// CORS is wide open: the API is consumed directly from browsers on other
/// origins.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::health_routes())
        .merge(api::predict_routes())
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
