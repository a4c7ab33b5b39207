//! HTTP adapters - REST API implementations.

pub mod middleware;
pub mod review;

pub use review::{review_routes, ReviewAppState};

use std::sync::Arc;

use axum::{routing::get, Json, Router};

use crate::application::WorkflowCoordinator;

/// The full API: submission endpoints plus `/health`.
///
/// Layers (tracing, timeouts, request ids) are added by the binary.
pub fn api_router(coordinator: Arc<WorkflowCoordinator>) -> Router {
    Router::new()
        .nest("/api/submissions", review_routes(ReviewAppState::new(coordinator)))
        .route("/health", get(health))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
