//! Portfolio Error Types
//!
//! Portfolio-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use serde_json::json;
use thiserror::Error;

/// Portfolio-specific result type alias
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Portfolio-specific error variants
#[derive(Debug, Error)]
pub enum PortfolioError {
    /// Input validation failed (all reasons collected)
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PortfolioError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PortfolioError::Validation(_) => StatusCode::BAD_REQUEST,
            PortfolioError::Database(_) | PortfolioError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PortfolioError::Validation(_) => ErrorKind::BadRequest,
            PortfolioError::Database(_) | PortfolioError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            PortfolioError::Database(e) => {
                tracing::error!(error = %e, "Portfolio database error");
            }
            PortfolioError::Internal(msg) => {
                tracing::error!(message = %msg, "Portfolio internal error");
            }
            PortfolioError::Validation(_) => {
                tracing::debug!(error = %self, "Portfolio validation error");
            }
        }
    }
}

impl IntoResponse for PortfolioError {
    fn into_response(self) -> Response {
        self.log();

        match self {
            // Validation failures serialize the full reason list
            PortfolioError::Validation(reasons) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": reasons })),
            )
                .into_response(),
            other => other.to_app_error().into_response(),
        }
    }
}
