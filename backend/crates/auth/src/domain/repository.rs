//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{auth_session::AuthSession, user::User};
use crate::domain::value_object::user_name::UserName;
use crate::error::AuthResult;
use uuid::Uuid;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user. The username/email unique constraints are the
    /// sole source of truth for "already registered"; a duplicate insert
    /// must surface as `AuthError::AlreadyRegistered`.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by user name (canonical form)
    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<User>>;

    /// Check if user name exists
    async fn exists_by_username(&self, username: &UserName) -> AuthResult<bool>;

    /// Check if email is already registered
    async fn exists_by_email(&self, email: &str) -> AuthResult<bool>;
}

/// Auth session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Create a new session
    async fn create(&self, session: &AuthSession) -> AuthResult<()>;

    /// Find an unexpired session by ID
    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>>;

    /// Update session activity
    async fn update(&self, session: &AuthSession) -> AuthResult<()>;

    /// Delete a session
    async fn delete(&self, session_id: Uuid) -> AuthResult<()>;

    /// Clean up expired sessions
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
