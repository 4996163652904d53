//! API error types and handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use termbase::TermbaseError;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Bad request from client.
    BadRequest(String),
    /// Conflict (duplicate data or illegal state transition).
    Conflict(String),
    /// Internal server error.
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal", msg),
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

impl From<TermbaseError> for ApiError {
    fn from(err: TermbaseError) -> Self {
        let message = err.to_string();
        match err {
            TermbaseError::ItemNotFound(_)
            | TermbaseError::SuggestionNotFound(_)
            | TermbaseError::ProfileNotFound(_) => ApiError::NotFound(message),

            TermbaseError::DuplicateIdentifier(_)
            | TermbaseError::DuplicateTerm(_)
            | TermbaseError::DuplicateTranslation { .. }
            | TermbaseError::DuplicateSuggestion(_)
            | TermbaseError::InvalidState { .. } => ApiError::Conflict(message),

            TermbaseError::InvalidSuggestionKind(_)
            | TermbaseError::InvalidArgument(_)
            | TermbaseError::Regex(_) => ApiError::BadRequest(message),

            TermbaseError::Io { .. }
            | TermbaseError::Json(_)
            | TermbaseError::Persistence(_) => ApiError::Internal(message),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}
