//! API Routes
//!
//! This module organizes all HTTP endpoints for the application:
//! - `/api/process-documents` - Batch document upload and classification
//! - `/api/health` - Health checks

pub mod documents;
pub mod health;

use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::middleware::cors_layer;
use crate::models::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let server = &state.config.server;
    let cors = cors_layer(&server.cors_allowed_origins);
    // Whole-request deadline; hitting it abandons the batch without partial
    // results.
    let timeout = TimeoutLayer::new(Duration::from_secs(server.request_timeout_secs));
    let body_limit = DefaultBodyLimit::max(server.max_upload_bytes);

    Router::new()
        .merge(documents::router(state.clone()))
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(timeout)
        .layer(body_limit)
}
