//! Request Access Use Case
//!
//! A visitor asks for an access code. Nothing is persisted at this step;
//! the admin gets a verification link and decides whether to issue a code.
//! Because nothing is persisted, a mail failure here is surfaced to the
//! caller instead of being swallowed.

use std::sync::Arc;

use platform::mailer::Mailer;
use url::form_urlencoded;

use crate::application::config::AccessConfig;
use crate::domain::repository::GrantRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AccessError, AccessResult};

/// Request access input
pub struct RequestAccessInput {
    pub email: String,
    pub message: String,
}

/// Request access output
#[derive(Debug)]
pub struct RequestAccessOutput {
    pub success: String,
}

/// Request access use case
pub struct RequestAccessUseCase<G>
where
    G: GrantRepository,
{
    grant_repo: Arc<G>,
    mailer: Arc<dyn Mailer>,
    config: Arc<AccessConfig>,
}

impl<G> RequestAccessUseCase<G>
where
    G: GrantRepository,
{
    pub fn new(grant_repo: Arc<G>, mailer: Arc<dyn Mailer>, config: Arc<AccessConfig>) -> Self {
        Self {
            grant_repo,
            mailer,
            config,
        }
    }

    pub async fn execute(&self, input: RequestAccessInput) -> AccessResult<RequestAccessOutput> {
        // Collect every validation failure before reporting
        let mut reasons = Vec::new();

        let email = match Email::new(&input.email) {
            Ok(email) => Some(email),
            Err(e) => {
                reasons.push(e.message().to_string());
                None
            }
        };

        let message = input.message.trim();
        if message.is_empty() {
            reasons.push("Message cannot be empty".to_string());
        }

        if !reasons.is_empty() {
            return Err(AccessError::Validation(reasons));
        }
        let email = email.expect("validated above");

        // A standing grant means the request was already approved
        if self.grant_repo.exists_by_email(&email).await? {
            return Err(AccessError::DuplicateRequest);
        }

        let verify_link = self.build_verify_link(&email);
        let body = format!(
            "A visitor has requested portfolio access.\n\n\
             Email: {}\n\
             Message: {}\n\n\
             Approve and send them an access code by opening:\n{}",
            email, message, verify_link
        );

        self.mailer
            .send(&self.config.admin_email, "New access request", &body)?;

        tracing::info!(email = %email, "Access request forwarded to admin");

        Ok(RequestAccessOutput {
            success: "Your request has been received. You will get an access code once approved."
                .to_string(),
        })
    }

    fn build_verify_link(&self, email: &Email) -> String {
        let query: String = form_urlencoded::Serializer::new(String::new())
            .append_pair("email", email.as_str())
            .finish();

        format!(
            "{}/api/access/verify-access-request?{}",
            self.config.public_base_url.trim_end_matches('/'),
            query
        )
    }
}
