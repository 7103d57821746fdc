//! HTTP boundary error type
//!
//! Every handler translates failures into [`ApiError`] so that no error
//! escapes unhandled: invalid input and unparseable bodies become 400,
//! everything else becomes a generic 500 with the detail logged
//! server-side only.

use crate::error::TriadError;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Error returned by HTTP handlers
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or missing required field (400)
    InvalidInput(String),
    /// Unparseable request body or query string (400)
    MalformedRequest(String),
    /// Unexpected internal failure (500, generic message to the caller)
    Internal(anyhow::Error),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast_ref::<TriadError>() {
            Some(TriadError::InvalidInput(message)) => Self::InvalidInput(message.clone()),
            _ => Self::Internal(err),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::InvalidInput(message) => (StatusCode::BAD_REQUEST, message),
            Self::MalformedRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error.".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
