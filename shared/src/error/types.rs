//! Error type and the JSON error envelope

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error with a structured error code
///
/// Rendered as `{"success": false, "error": <status>, "message": <message>}`.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Message sent to the client
    pub message: String,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create an authorization error; the message reads `"<code>: <description>"`
    pub fn auth(code: ErrorCode, description: impl AsRef<str>) -> Self {
        Self::with_message(
            code,
            format!("{}: {}", code.wire_code(), description.as_ref()),
        )
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a bad request error (missing or empty body)
    pub fn bad_request() -> Self {
        Self::new(ErrorCode::BadRequest)
    }

    /// Create a not found error
    pub fn not_found() -> Self {
        Self::new(ErrorCode::NotFound)
    }

    /// Create an unprocessable error
    pub fn unprocessable() -> Self {
        Self::new(ErrorCode::Unprocessable)
    }

    /// Create an already exists error
    pub fn already_exists() -> Self {
        Self::new(ErrorCode::AlreadyExists)
    }

    /// Create a database error
    pub fn database() -> Self {
        Self::new(ErrorCode::DatabaseError)
    }
}

/// JSON envelope shared by every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Always `false`
    pub success: bool,
    /// HTTP status code
    pub error: u16,
    /// Human-readable message
    pub message: String,
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        Self {
            success: false,
            error: err.http_status().as_u16(),
            message: err.message.clone(),
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ErrorBody::from(&self);

        if status.is_server_error() {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        } else if self.code.is_auth() {
            tracing::debug!(code = %self.code, status = status.as_u16(), "Request rejected by auth");
        }

        (status, Json(body)).into_response()
    }
}
