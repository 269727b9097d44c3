//! Feed resource endpoints.
//!
//! All data comes from the fixture set built at startup; every handler is
//! a read. Malformed or unknown todo ids are rejected rather than served
//! as empty bodies.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use beacon_types::TodoId;
use tracing::debug;

use crate::api::error::ApiError;
use crate::api::request_context::RequestContext;
use crate::state::AppState;

/// Create feed routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(greeting))
        .route("/notifications", get(get_notifications))
        .route("/todos/{todo_id}", get(get_todo))
}

/// Fixed greeting.
///
/// GET /
async fn greeting() -> &'static str {
    "Hello World!"
}

/// The global notification counter record.
///
/// GET /notifications
async fn get_notifications(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.fixtures().counts())
}

/// Get a single todo by id.
///
/// GET /todos/{todo_id}
async fn get_todo(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(todo_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let request_id = ctx.request_id;

    let todo_id: TodoId = todo_id.parse().map_err(|e| {
        ApiError::bad_request("invalid_todo_id", format!("Invalid todo id: {e}"))
            .with_request_id(request_id.clone())
    })?;

    // Optional artificial latency so clients can exercise loading states.
    if let Some(delay) = state.todo_delay() {
        tokio::time::sleep(delay).await;
    }

    match state.fixtures().todo(todo_id) {
        Some(record) => {
            debug!(todo_id = %todo_id, request_id = %request_id, "todo served");
            Ok(Json(record.clone()))
        }
        None => Err(
            ApiError::not_found("todo_not_found", format!("Todo {todo_id} not found"))
                .with_request_id(request_id),
        ),
    }
}
