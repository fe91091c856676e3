//! Request Context
//!
//! Explicit per-request authentication state. The session middleware
//! resolves the cookie once and inserts a [`CurrentUser`] into request
//! extensions; handlers read it instead of reaching into shared session
//! storage.

use uuid::Uuid;

/// The authenticated user behind the current request.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// Account ID of the session owner
    pub user_id: Uuid,
    /// Username recorded when the session was created
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_user_clone() {
        let user = CurrentUser {
            user_id: Uuid::new_v4(),
            username: "ab_1".to_string(),
        };
        let copy = user.clone();
        assert_eq!(copy.user_id, user.user_id);
        assert_eq!(copy.username, "ab_1");
    }
}
