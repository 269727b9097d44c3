//! HTTP API handlers and routing.

pub mod error;
mod feed;
mod health;
mod request_context;

use axum::{
    http::{header, Method},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

/// Create the main API router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Cross-origin reads are permitted from any origin
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        // Health endpoint
        .merge(health::routes())
        // Feed resources
        .merge(feed::routes())
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Application state
        .with_state(state)
}
