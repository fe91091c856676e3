//! User Name Value Object
//!
//! The public handle used to log in. Case is preserved for display;
//! uniqueness checks run against the lowercase canonical form.
//!
//! ## Invariants
//! - Non-empty after trimming
//! - Length at most 32 characters
//! - Only ASCII letters, digits, `.` and `_`

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 32;

/// Error returned when user name validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserNameError {
    /// User name is empty after trimming
    Empty,

    /// User name is too long
    TooLong { length: usize, max: usize },

    /// User name contains a character outside [A-Za-z0-9._]
    InvalidCharacter { char: char },
}

impl fmt::Display for UserNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Username cannot be empty"),
            Self::TooLong { length, max } => {
                write!(f, "Username is too long ({length} chars, maximum {max})")
            }
            Self::InvalidCharacter { char } => {
                write!(
                    f,
                    "Username contains invalid character '{char}'. Only letters, numbers, dots and underscores are allowed"
                )
            }
        }
    }
}

impl std::error::Error for UserNameError {}

/// Validated user name
///
/// # Storage
/// - `original`: the user's input (trimmed, preserves case)
/// - `canonical`: lowercase form for uniqueness checks
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName {
    original: String,
    canonical: String,
}

impl UserName {
    /// Create a new UserName from raw input
    pub fn new(input: impl AsRef<str>) -> Result<Self, UserNameError> {
        let original = input.as_ref().trim().to_string();

        if original.is_empty() {
            return Err(UserNameError::Empty);
        }

        let length = original.chars().count();
        if length > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                length,
                max: USER_NAME_MAX_LENGTH,
            });
        }

        if let Some(ch) = original
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '.' || *c == '_'))
        {
            return Err(UserNameError::InvalidCharacter { char: ch });
        }

        let canonical = original.to_lowercase();
        Ok(Self {
            original,
            canonical,
        })
    }

    /// Get the original user name (preserves case)
    #[inline]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Get the canonical (lowercase) user name
    #[inline]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Create from database values (assumes already validated)
    pub fn from_db(original: &str) -> Self {
        Self {
            original: original.to_string(),
            canonical: original.to_lowercase(),
        }
    }
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserName")
            .field("original", &self.original)
            .field("canonical", &self.canonical)
            .finish()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.canonical
    }
}

impl TryFrom<String> for UserName {
    type Error = UserNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.original
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(UserName::new("alice").is_ok());
        assert!(UserName::new("ab_1").is_ok());
        assert!(UserName::new("Alice.Smith").is_ok());
        assert!(UserName::new("A1._").is_ok());
    }

    #[test]
    fn test_trims_whitespace() {
        let name = UserName::new("  alice  ").unwrap();
        assert_eq!(name.original(), "alice");
    }

    #[test]
    fn test_case_preserved_canonical_lowered() {
        let name = UserName::new("Alice").unwrap();
        assert_eq!(name.original(), "Alice");
        assert_eq!(name.canonical(), "alice");
    }

    #[test]
    fn test_empty_fails() {
        assert!(matches!(UserName::new(""), Err(UserNameError::Empty)));
        assert!(matches!(UserName::new("   "), Err(UserNameError::Empty)));
    }

    #[test]
    fn test_too_long() {
        let input = "a".repeat(USER_NAME_MAX_LENGTH + 1);
        assert!(matches!(
            UserName::new(&input),
            Err(UserNameError::TooLong { .. })
        ));
    }

    #[test]
    fn test_invalid_characters() {
        assert!(matches!(
            UserName::new("alice-smith"),
            Err(UserNameError::InvalidCharacter { char: '-' })
        ));
        assert!(matches!(
            UserName::new("alice@smith"),
            Err(UserNameError::InvalidCharacter { char: '@' })
        ));
        assert!(matches!(
            UserName::new("alice smith"),
            Err(UserNameError::InvalidCharacter { char: ' ' })
        ));
        assert!(matches!(
            UserName::new("日本語"),
            Err(UserNameError::InvalidCharacter { .. })
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let name = UserName::new("Alice").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Alice\"");

        let back: UserName = serde_json::from_str(&json).unwrap();
        assert_eq!(back.canonical(), "alice");
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<UserName, _> = serde_json::from_str("\"bad name\"");
        assert!(result.is_err());
    }
}
