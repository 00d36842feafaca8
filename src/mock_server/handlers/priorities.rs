//! Priority and priority scheme endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::RwLock;

use crate::mock_server::state::MockState;

/// Jira-style error document.
fn error_response(status: StatusCode, message: String) -> Response {
    (
        status,
        Json(serde_json::json!({
            "errorMessages": [message],
            "errors": {}
        })),
    )
        .into_response()
}

fn unauthorized() -> Response {
    error_response(
        StatusCode::UNAUTHORIZED,
        "You are not authenticated. Authentication required to perform this operation.".to_string(),
    )
}

fn authorization(headers: &HeaderMap) -> Option<&str> {
    headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok())
}

/// GET /rest/api/2/priority/{id}
pub async fn get_priority(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;

    if !state.is_authorized(authorization(&headers)) {
        return unauthorized();
    }

    match state.get_priority(&id) {
        Some(priority) => (StatusCode::OK, Json(priority.clone())).into_response(),
        None => error_response(
            StatusCode::NOT_FOUND,
            format!("The priority with id '{id}' does not exist"),
        ),
    }
}

/// GET /rest/api/2/priorityschemes/{id}
pub async fn get_priority_scheme(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;

    if !state.is_authorized(authorization(&headers)) {
        return unauthorized();
    }

    match state.get_scheme(&id) {
        Some(scheme) => (StatusCode::OK, Json(scheme.clone())).into_response(),
        None => error_response(
            StatusCode::NOT_FOUND,
            format!("Priority scheme with id {id} not found."),
        ),
    }
}
