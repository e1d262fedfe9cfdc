//! Mapping from the core error taxonomy to HTTP responses.
//!
//! Validation, not-found and unauthorized conditions map to their
//! structured 4xx bodies. Backend, decode and crypto faults are
//! logged with their full context here and surfaced as a generic 500,
//! never leaking internals to the caller.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use inmo_core::error::InmoError;
use serde_json::json;

#[derive(Debug)]
pub struct ApiError(pub InmoError);

impl From<InmoError> for ApiError {
    fn from(err: InmoError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            InmoError::Validation { errors } => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": { "fieldErrors": errors } })),
            )
                .into_response(),
            InmoError::NotFound { entity, .. } => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("{entity} not found") })),
            )
                .into_response(),
            InmoError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Unauthorized" })),
            )
                .into_response(),
            InmoError::AuthenticationFailed { .. } => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Invalid credentials" })),
            )
                .into_response(),
            fault => {
                tracing::error!(error = %fault, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
