//! Register Use Case
//!
//! Creates a new user account behind the access gate. Every validation
//! failure is collected before reporting so the form can show all problems
//! at once; the grant check only runs once the input is clean.

use std::sync::Arc;

use access::domain::repository::GrantRepository;
use access::domain::value_object::email::Email;
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_name::UserName, user_password::UserPassword};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Email from a verified grant-token cookie, if the visitor has one
    pub granted_email: Option<String>,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub username: String,
    pub redirect: String,
}

/// Register use case
pub struct RegisterUseCase<U, G>
where
    U: UserRepository,
    G: GrantRepository,
{
    user_repo: Arc<U>,
    grant_repo: Arc<G>,
    config: Arc<AuthConfig>,
}

impl<U, G> RegisterUseCase<U, G>
where
    U: UserRepository,
    G: GrantRepository,
{
    pub fn new(user_repo: Arc<U>, grant_repo: Arc<G>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            grant_repo,
            config,
        }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // Collect every validation failure before reporting
        let mut reasons = Vec::new();

        let username = match UserName::new(&input.username) {
            Ok(name) => Some(name),
            Err(e) => {
                reasons.push(e.to_string());
                None
            }
        };

        let email = match Email::new(&input.email) {
            Ok(email) => Some(email),
            Err(e) => {
                reasons.push(e.message().to_string());
                None
            }
        };

        let password = if input.password.trim().is_empty() {
            reasons.push("Password cannot be empty".to_string());
            None
        } else {
            if input.password != input.confirm_password {
                reasons.push("Passwords do not match".to_string());
            }
            match ClearTextPassword::new(input.password) {
                Ok(password) => Some(password),
                Err(e) => {
                    reasons.push(e.to_string());
                    None
                }
            }
        };

        if let Some(email) = &email {
            if self.user_repo.exists_by_email(email.as_str()).await? {
                reasons.push("This email is already registered".to_string());
            }
        }

        if !reasons.is_empty() {
            return Err(AuthError::Validation(reasons));
        }

        let username = username.expect("validated above");
        let email = email.expect("validated above");
        let password = password.expect("validated above");

        // Access gate: a grant cookie for this email, or a standing grant
        // in the store. Redemption is tracked per visitor, not per grant.
        let granted = match &input.granted_email {
            Some(granted_email) if granted_email == email.as_str() => true,
            _ => self
                .grant_repo
                .exists_by_email(&email)
                .await
                .map_err(|e| AuthError::Internal(e.to_string()))?,
        };

        if !granted {
            return Err(AuthError::AccessVerificationRequired);
        }

        let password_hash = UserPassword::from_clear_text(&password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new(username, email, password_hash);

        // Atomic insert-or-fail; unique violations are the duplicate check
        self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User registered"
        );

        Ok(RegisterOutput {
            username: user.username.original().to_string(),
            redirect: "/login".to_string(),
        })
    }
}
