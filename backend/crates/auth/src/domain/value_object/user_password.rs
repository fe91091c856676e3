//! User Password Value Object
//!
//! Wraps the platform's Argon2id machinery for the credential store. Only
//! the PHC hash string ever reaches this type; clear text lives in
//! `platform::password::ClearTextPassword` and is zeroized on drop.

use std::fmt;

use platform::password::{ClearTextPassword, HashedPassword, PasswordHashError};

/// Stored password hash
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword {
    hash: HashedPassword,
}

impl UserPassword {
    /// Hash a validated clear-text password
    pub fn from_clear_text(
        password: &ClearTextPassword,
        pepper: Option<&[u8]>,
    ) -> Result<Self, PasswordHashError> {
        Ok(Self {
            hash: password.hash(pepper)?,
        })
    }

    /// Create from a PHC string loaded from the database
    pub fn from_db(phc: impl Into<String>) -> Result<Self, PasswordHashError> {
        Ok(Self {
            hash: HashedPassword::from_phc_string(phc)?,
        })
    }

    /// The PHC string for storage
    pub fn as_str(&self) -> &str {
        self.hash.as_phc_string()
    }

    /// Constant-time verification against a candidate password
    pub fn verify(&self, candidate: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        self.hash.verify(candidate, pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword").field("hash", &"[HASH]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let clear = ClearTextPassword::new("longpass1".to_string()).unwrap();
        let password = UserPassword::from_clear_text(&clear, None).unwrap();

        assert!(password.verify(&clear, None));

        let wrong = ClearTextPassword::new("longpass2".to_string()).unwrap();
        assert!(!password.verify(&wrong, None));
    }

    #[test]
    fn test_db_roundtrip() {
        let clear = ClearTextPassword::new("longpass1".to_string()).unwrap();
        let password = UserPassword::from_clear_text(&clear, None).unwrap();

        let restored = UserPassword::from_db(password.as_str()).unwrap();
        assert!(restored.verify(&clear, None));
    }

    #[test]
    fn test_invalid_phc_rejected() {
        assert!(UserPassword::from_db("plaintext-password").is_err());
    }
}
