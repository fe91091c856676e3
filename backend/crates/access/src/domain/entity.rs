//! Access Grant Entity
//!
//! One grant exists per email address. The first-issued code stays
//! authoritative; a redeemed grant keeps proving the email was approved but
//! its code cannot be redeemed again.

use chrono::{DateTime, Utc};
use kernel::id::GrantId;

use crate::domain::value_object::{access_code::AccessCode, email::Email};

/// An access grant: email plus the code that unlocks registration
#[derive(Debug, Clone)]
pub struct AccessGrant {
    pub grant_id: GrantId,
    pub email: Email,
    pub access_code: AccessCode,
    pub created_at: DateTime<Utc>,
    /// Set when the code is redeemed; a redeemed code never redeems again
    pub redeemed_at: Option<DateTime<Utc>>,
}

impl AccessGrant {
    /// Create a new grant with a freshly generated code
    pub fn new(email: Email) -> Self {
        Self {
            grant_id: GrantId::new(),
            email,
            access_code: AccessCode::generate(),
            created_at: Utc::now(),
            redeemed_at: None,
        }
    }

    /// Whether the code has already been redeemed
    pub fn is_redeemed(&self) -> bool {
        self.redeemed_at.is_some()
    }

    /// Mark the grant redeemed now
    pub fn redeem(&mut self) {
        self.redeemed_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grant_is_unredeemed() {
        let grant = AccessGrant::new(Email::new("a@b.com").unwrap());
        assert!(!grant.is_redeemed());
        assert_eq!(grant.email.as_str(), "a@b.com");
        assert_eq!(grant.access_code.as_str().len(), 8);
    }

    #[test]
    fn test_redeem_sets_timestamp() {
        let mut grant = AccessGrant::new(Email::new("a@b.com").unwrap());
        grant.redeem();
        assert!(grant.is_redeemed());
        assert!(grant.redeemed_at.unwrap() <= Utc::now());
    }
}
