//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Credential problems stay generic so a
//! caller cannot probe which field was wrong; registration validation
//! returns the full reason list at once.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use serde_json::json;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration validation failed (all reasons collected)
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// Wrong username/password, unknown account, or inactive account.
    /// One variant on purpose: the response must not reveal which.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Username or email already registered
    #[error("This username or email is already registered")]
    AlreadyRegistered,

    /// Registration attempted without a redeemed access grant
    #[error("Access code verification required.")]
    AccessVerificationRequired,

    /// Session not found, expired, or token signature invalid
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials
            | AuthError::AccessVerificationRequired
            | AuthError::SessionInvalid => StatusCode::UNAUTHORIZED,
            AuthError::AlreadyRegistered => StatusCode::CONFLICT,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::InvalidCredentials
            | AuthError::AccessVerificationRequired
            | AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::AlreadyRegistered => ErrorKind::Conflict,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();

        match self {
            // Registration failures serialize the full reason list
            AuthError::Validation(reasons) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": reasons })),
            )
                .into_response(),
            // Missing grant: tell the client where to go next
            AuthError::AccessVerificationRequired => (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": "Access code verification required.",
                    "redirect": "/access-code",
                })),
            )
                .into_response(),
            other => other.to_app_error().into_response(),
        }
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        if err.kind() == ErrorKind::Conflict {
            AuthError::AlreadyRegistered
        } else {
            AuthError::Internal(err.to_string())
        }
    }
}
