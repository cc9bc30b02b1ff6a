//! Mapping from domain errors to HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use customer_core::CustomerError;
use serde_json::json;
use thiserror::Error;

/// Error returned by customer handlers
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub CustomerError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            CustomerError::Validation(violations) => {
                let body = Json(json!({
                    "error": "One or more fields are invalid",
                    "code": "validation_error",
                    "violations": violations,
                }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            CustomerError::IdMismatch { path, body } => {
                tracing::debug!("Rejected update: path id {} does not match body id {:?}", path, body);
                StatusCode::BAD_REQUEST.into_response()
            }
            CustomerError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            CustomerError::AlreadyExists(id) => {
                let body = Json(json!({
                    "error": format!("Customer {} already exists", id),
                    "code": "conflict",
                }));
                (StatusCode::CONFLICT, body).into_response()
            }
            e @ CustomerError::Storage(_) => {
                tracing::error!("Request failed: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
