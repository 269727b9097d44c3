//! Health check endpoint.
//!
//! Used by load balancers and orchestration systems to determine if the
//! service is up. The feed has no external dependencies, so liveness is
//! the whole story.

use axum::{response::IntoResponse, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct HealthResponse {
    /// Service status: always "ok" while the process is serving.
    pub status: String,

    /// Service name.
    pub service: String,

    /// Service version.
    pub version: String,

    /// Current timestamp (ISO 8601).
    pub timestamp: String,
}

/// Create health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/healthz", get(healthz))
}

/// Basic health check - is the service running?
async fn healthz() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "feed".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
