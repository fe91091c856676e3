//! Sign In Use Case
//!
//! Authenticates a user and creates a session. Every failure path returns
//! the same `InvalidCredentials` so a caller cannot learn whether the
//! username exists, the account is inactive, or the password was wrong.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub username: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Session token for cookie
    pub session_token: String,
    pub username: String,
    pub redirect: String,
}

/// Sign in use case
pub struct SignInUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> SignInUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        // Field-shape failures get the same rejection as bad credentials
        let username =
            UserName::new(&input.username).map_err(|_| AuthError::InvalidCredentials)?;

        let password =
            ClearTextPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.can_login() {
            return Err(AuthError::InvalidCredentials);
        }

        if !user.password_hash.verify(&password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        // Create session
        let session = AuthSession::new(
            user.user_id,
            user.username.original().to_string(),
            self.config.session_ttl_ms(),
        );

        self.session_repo.create(&session).await?;

        let session_token = self.generate_session_token(&session);

        tracing::info!(
            user_id = %user.user_id,
            session_id = %session.session_id,
            "User signed in"
        );

        Ok(SignInOutput {
            session_token,
            username: user.username.original().to_string(),
            redirect: "/timeline".to_string(),
        })
    }

    /// Generate signed session token (`<uuid>.<base64url signature>`)
    fn generate_session_token(&self, session: &AuthSession) -> String {
        use base64::Engine;
        use hmac::{Hmac, Mac};
        use sha2::Sha256;

        let session_id = session.session_id.to_string();

        let mut mac = Hmac::<Sha256>::new_from_slice(&self.config.session_secret)
            .expect("HMAC can take key of any size");
        mac.update(session_id.as_bytes());
        let signature = mac.finalize().into_bytes();

        format!(
            "{}.{}",
            session_id,
            base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(signature)
        )
    }
}
