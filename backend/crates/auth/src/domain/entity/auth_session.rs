//! Auth Session Entity
//!
//! Server-side session rows referenced by the signed cookie token. The
//! username is denormalized onto the row so the middleware can build the
//! request context without a second lookup.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::value_object::user_id::UserId;

/// One authenticated browser session
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub session_id: Uuid,
    pub user_id: UserId,
    pub username: String,
    /// Expiry in epoch milliseconds
    pub expires_at_ms: i64,
    pub created_at: DateTime<Utc>,
    pub last_activity_at: DateTime<Utc>,
}

impl AuthSession {
    /// Create a session expiring `ttl_ms` from now
    pub fn new(user_id: UserId, username: String, ttl_ms: i64) -> Self {
        let now = Utc::now();
        Self {
            session_id: Uuid::new_v4(),
            user_id,
            username,
            expires_at_ms: now.timestamp_millis() + ttl_ms,
            created_at: now,
            last_activity_at: now,
        }
    }

    /// Whether the session has passed its expiry
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() >= self.expires_at_ms
    }

    /// Record activity now
    pub fn touch(&mut self) {
        self.last_activity_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_not_expired() {
        let session = AuthSession::new(UserId::new(), "ab_1".to_string(), 60_000);
        assert!(!session.is_expired());
        assert_eq!(session.username, "ab_1");
    }

    #[test]
    fn test_zero_ttl_is_expired() {
        let session = AuthSession::new(UserId::new(), "ab_1".to_string(), 0);
        assert!(session.is_expired());
    }

    #[test]
    fn test_touch_advances_activity() {
        let mut session = AuthSession::new(UserId::new(), "ab_1".to_string(), 60_000);
        let before = session.last_activity_at;
        session.touch();
        assert!(session.last_activity_at >= before);
    }
}
