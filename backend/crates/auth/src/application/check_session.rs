//! Check Session Use Case
//!
//! Verifies the signed cookie token and loads the session behind it.

use std::sync::Arc;

use kernel::context::CurrentUser;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::SessionRepository;
use crate::error::{AuthError, AuthResult};

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Resolve the session into the per-request user context
    pub async fn current_user(&self, session_token: &str) -> AuthResult<CurrentUser> {
        let session = self.get_session(session_token).await?;

        Ok(CurrentUser {
            user_id: session.user_id.into_uuid(),
            username: session.username,
        })
    }

    /// Just check if session is valid (returns bool)
    pub async fn is_valid(&self, session_token: &str) -> bool {
        self.get_session(session_token).await.is_ok()
    }

    /// Get session and update last activity
    pub async fn get_session(&self, session_token: &str) -> AuthResult<AuthSession> {
        let session_id = self.parse_session_token(session_token)?;

        let session = self
            .session_repo
            .find_by_id(session_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if session.is_expired() {
            self.session_repo.delete(session_id).await?;
            return Err(AuthError::SessionInvalid);
        }

        let mut session = session;
        session.touch();

        // Update activity in the background
        let session_clone = session.clone();
        let repo = self.session_repo.clone();
        tokio::spawn(async move {
            if let Err(e) = repo.update(&session_clone).await {
                tracing::warn!(error = %e, "Failed to update session activity");
            }
        });

        Ok(session)
    }

    /// Parse and verify session token
    fn parse_session_token(&self, token: &str) -> AuthResult<Uuid> {
        use base64::Engine;
        use hmac::{Hmac, Mac};
        use sha2::Sha256;

        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 2 {
            return Err(AuthError::SessionInvalid);
        }

        let session_id_str = parts[0];
        let signature_b64 = parts[1];

        let mut mac = Hmac::<Sha256>::new_from_slice(&self.config.session_secret)
            .expect("HMAC can take key of any size");
        mac.update(session_id_str.as_bytes());

        let signature = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| AuthError::SessionInvalid)?;

        mac.verify_slice(&signature)
            .map_err(|_| AuthError::SessionInvalid)?;

        session_id_str
            .parse()
            .map_err(|_| AuthError::SessionInvalid)
    }
}
