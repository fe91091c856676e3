//! Issue Grant Use Case
//!
//! The admin verification step: generate a code, persist the grant, mail
//! the code to the requester. The insert's unique constraint is the sole
//! duplicate check, so two concurrent verifications for one email cannot
//! both issue a code.

use std::sync::Arc;

use platform::mailer::Mailer;

use crate::domain::entity::AccessGrant;
use crate::domain::repository::GrantRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AccessError, AccessResult};

/// Issue grant input
pub struct IssueGrantInput {
    pub email: String,
}

/// Issue grant output
#[derive(Debug)]
pub struct IssueGrantOutput {
    pub email: String,
    pub success: String,
}

/// Issue grant use case
pub struct IssueGrantUseCase<G>
where
    G: GrantRepository,
{
    grant_repo: Arc<G>,
    mailer: Arc<dyn Mailer>,
}

impl<G> IssueGrantUseCase<G>
where
    G: GrantRepository,
{
    pub fn new(grant_repo: Arc<G>, mailer: Arc<dyn Mailer>) -> Self {
        Self { grant_repo, mailer }
    }

    pub async fn execute(&self, input: IssueGrantInput) -> AccessResult<IssueGrantOutput> {
        let email = Email::new(&input.email)
            .map_err(|e| AccessError::Validation(vec![e.message().to_string()]))?;

        let grant = AccessGrant::new(email.clone());

        // Atomic insert-or-fail; a duplicate email surfaces as Conflict
        self.grant_repo.create(&grant).await?;

        tracing::info!(
            grant_id = %grant.grant_id,
            email = %grant.email,
            "Access grant issued"
        );

        let body = format!(
            "Your portfolio access request was approved.\n\n\
             Your access code is: {}\n\n\
             Enter this code on the access-code page to register.",
            grant.access_code
        );

        // The grant is already persisted; a delivery failure must not undo it
        if let Err(e) = self
            .mailer
            .send(email.as_str(), "Your access code", &body)
        {
            tracing::warn!(
                email = %email,
                error = %e,
                "Access code mail failed; grant remains issued"
            );
        }

        Ok(IssueGrantOutput {
            success: format!("Access code sent to {}", email),
            email: email.into_db(),
        })
    }
}
