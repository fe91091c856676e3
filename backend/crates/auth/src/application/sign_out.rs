//! Sign Out Use Case
//!
//! Deletes the session row behind a token. A bad token is not an error;
//! the caller clears the cookie either way.

use std::sync::Arc;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::SessionRepository;
use crate::error::AuthResult;

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> SignOutUseCase<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, session_token: &str) -> AuthResult<()> {
        let check = CheckSessionUseCase::new(self.session_repo.clone(), self.config.clone());

        if let Ok(session) = check.get_session(session_token).await {
            self.session_repo.delete(session.session_id).await?;
            tracing::info!(session_id = %session.session_id, "User signed out");
        }

        Ok(())
    }
}
