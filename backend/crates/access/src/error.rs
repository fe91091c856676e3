//! Access Error Types
//!
//! Access-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Validation failures carry the full
//! reason list so callers can display every problem at once.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use serde_json::json;
use thiserror::Error;

use platform::mailer::MailError;

/// Access-specific result type alias
pub type AccessResult<T> = Result<T, AccessError>;

/// Access-specific error variants
#[derive(Debug, Error)]
pub enum AccessError {
    /// Input validation failed (all reasons collected)
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// An access request already exists for this email
    #[error("An access request already exists for this email")]
    DuplicateRequest,

    /// Access code does not match any unredeemed grant
    #[error("The access code you entered is incorrect!")]
    IncorrectAccessCode,

    /// Mail could not be delivered and nothing was persisted
    #[error("Could not deliver mail: {0}")]
    Delivery(#[from] MailError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccessError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccessError::Validation(_) => StatusCode::BAD_REQUEST,
            AccessError::DuplicateRequest => StatusCode::CONFLICT,
            AccessError::IncorrectAccessCode => StatusCode::UNAUTHORIZED,
            AccessError::Delivery(_) => StatusCode::SERVICE_UNAVAILABLE,
            AccessError::Database(_) | AccessError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccessError::Validation(_) => ErrorKind::BadRequest,
            AccessError::DuplicateRequest => ErrorKind::Conflict,
            AccessError::IncorrectAccessCode => ErrorKind::Unauthorized,
            AccessError::Delivery(_) => ErrorKind::ServiceUnavailable,
            AccessError::Database(_) | AccessError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AccessError::Database(e) => {
                tracing::error!(error = %e, "Access database error");
            }
            AccessError::Internal(msg) => {
                tracing::error!(message = %msg, "Access internal error");
            }
            AccessError::Delivery(e) => {
                tracing::warn!(error = %e, "Access mail delivery failed");
            }
            AccessError::IncorrectAccessCode => {
                tracing::warn!("Incorrect access code attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Access error");
            }
        }
    }
}

impl IntoResponse for AccessError {
    fn into_response(self) -> Response {
        self.log();

        match self {
            // Validation failures serialize the full reason list
            AccessError::Validation(reasons) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": reasons })),
            )
                .into_response(),
            other => other.to_app_error().into_response(),
        }
    }
}

impl From<AppError> for AccessError {
    fn from(err: AppError) -> Self {
        // A Conflict surfacing from the unique-constraint mapping means the
        // email already holds a grant
        if err.kind() == ErrorKind::Conflict {
            AccessError::DuplicateRequest
        } else {
            AccessError::Internal(err.to_string())
        }
    }
}
