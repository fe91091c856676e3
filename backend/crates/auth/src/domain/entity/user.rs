//! User Entity
//!
//! A flat account record. The observed flows never update or delete an
//! account; `is_active` exists so an operator can switch a login off.

use chrono::{DateTime, Utc};

use access::domain::value_object::email::Email;

use crate::domain::value_object::{
    user_id::UserId, user_name::UserName, user_password::UserPassword,
};

/// A registered user account
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    pub username: UserName,
    pub email: Email,
    pub password_hash: UserPassword,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new active account
    pub fn new(username: UserName, email: Email, password_hash: UserPassword) -> Self {
        Self {
            user_id: UserId::new(),
            username,
            email,
            password_hash,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// Whether this account may log in
    pub fn can_login(&self) -> bool {
        self.is_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::ClearTextPassword;

    fn test_user() -> User {
        let clear = ClearTextPassword::new("longpass1".to_string()).unwrap();
        User::new(
            UserName::new("ab_1").unwrap(),
            Email::new("a@b.com").unwrap(),
            UserPassword::from_clear_text(&clear, None).unwrap(),
        )
    }

    #[test]
    fn test_new_user_is_active() {
        let user = test_user();
        assert!(user.is_active);
        assert!(user.can_login());
    }

    #[test]
    fn test_inactive_user_cannot_login() {
        let mut user = test_user();
        user.is_active = false;
        assert!(!user.can_login());
    }
}
