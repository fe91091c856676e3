//! Access Code Value Object
//!
//! A short opaque token tied to one email address. Generated codes are
//! 4 cryptographically random bytes rendered as 8 lowercase hex characters;
//! user-submitted candidates only have to be non-empty and alphanumeric so
//! the lookup itself decides whether the code is real.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of random bytes behind a generated code
pub const ACCESS_CODE_BYTES: usize = 4;

/// Upper bound on a submitted candidate (generated codes are 8 chars)
pub const ACCESS_CODE_MAX_LENGTH: usize = 32;

/// Validated access code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessCode(String);

impl AccessCode {
    /// Validate a user-submitted candidate code.
    pub fn new(code: impl Into<String>) -> AppResult<Self> {
        let code = code.into().trim().to_string();

        if code.is_empty() {
            return Err(AppError::bad_request("Access code cannot be empty"));
        }

        if code.len() > ACCESS_CODE_MAX_LENGTH {
            return Err(AppError::bad_request("Invalid access code format"));
        }

        if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(AppError::bad_request("Invalid access code format"));
        }

        Ok(Self(code))
    }

    /// Generate a fresh random code (8 lowercase hex characters).
    pub fn generate() -> Self {
        let bytes = platform::crypto::random_bytes(ACCESS_CODE_BYTES);
        Self(platform::crypto::to_hex(&bytes))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to string for database storage
    pub fn into_db(self) -> String {
        self.0
    }
}

impl fmt::Display for AccessCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for AccessCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
