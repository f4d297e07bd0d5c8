//! Application error type and its mapping to HTTP responses.
//!
//! All domain and validation failures are represented as [`AppError`] variants.
//! Handlers return `Result<_, AppError>` and the [`IntoResponse`] implementation
//! is the single place where error kinds are translated into status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload returned in JSON error bodies.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Typed failure kinds surfaced by the link lifecycle.
///
/// One variant per error kind, so callers can match on outcomes instead of
/// parsing messages:
///
/// - [`AppError::InvalidFormat`] - the candidate URL does not parse into a scheme and host
/// - [`AppError::Unreachable`] - the reachability probe did not observe HTTP 200
/// - [`AppError::Persistence`] - the store rejected the new link
/// - [`AppError::NotFound`] - no link exists for the short code
/// - [`AppError::Expired`] - the link exists but its expiry has passed
/// - [`AppError::Internal`] - unexpected failures (e.g. QR rendering)
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    InvalidFormat { message: String, details: Value },
    #[error("{message}")]
    Unreachable { message: String, details: Value },
    #[error("{message}")]
    Persistence { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Expired { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn invalid_format(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidFormat {
            message: message.into(),
            details,
        }
    }
    pub fn unreachable(message: impl Into<String>, details: Value) -> Self {
        Self::Unreachable {
            message: message.into(),
            details,
        }
    }
    pub fn persistence(message: impl Into<String>, details: Value) -> Self {
        Self::Persistence {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn expired(message: impl Into<String>, details: Value) -> Self {
        Self::Expired {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::InvalidFormat { message, details } => {
                (StatusCode::BAD_REQUEST, "invalid_format", message, details)
            }
            AppError::Unreachable { message, details } => {
                (StatusCode::BAD_REQUEST, "unreachable", message, details)
            }
            AppError::Persistence { message, details } => (
                StatusCode::BAD_REQUEST,
                "persistence_failure",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Expired { message, details } => {
                (StatusCode::GONE, "expired", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::invalid_format(
            "Request validation failed",
            json!({ "errors": errors.to_string() }),
        )
    }
}
