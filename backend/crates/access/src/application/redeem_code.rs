//! Redeem Code Use Case
//!
//! Exchanges a submitted access code for a signed grant token. Codes are
//! consume-on-redeem: a second redemption of the same code is rejected the
//! same way as a wrong code, so the caller learns nothing about which case
//! it hit.

use std::sync::Arc;

use crate::application::config::AccessConfig;
use crate::application::grant_token::build_grant_token;
use crate::domain::repository::GrantRepository;
use crate::domain::value_object::access_code::AccessCode;
use crate::error::{AccessError, AccessResult};

/// Redeem code input
pub struct RedeemCodeInput {
    pub access_code: String,
}

/// Redeem code output
#[derive(Debug)]
pub struct RedeemCodeOutput {
    /// Email the grant was issued for
    pub email: String,
    /// Signed token for the grant cookie
    pub grant_token: String,
}

/// Redeem code use case
pub struct RedeemCodeUseCase<G>
where
    G: GrantRepository,
{
    grant_repo: Arc<G>,
    config: Arc<AccessConfig>,
}

impl<G> RedeemCodeUseCase<G>
where
    G: GrantRepository,
{
    pub fn new(grant_repo: Arc<G>, config: Arc<AccessConfig>) -> Self {
        Self { grant_repo, config }
    }

    pub async fn execute(&self, input: RedeemCodeInput) -> AccessResult<RedeemCodeOutput> {
        // Format failures get the same generic rejection as unknown codes
        let code =
            AccessCode::new(&input.access_code).map_err(|_| AccessError::IncorrectAccessCode)?;

        let grant = self
            .grant_repo
            .find_by_code(&code)
            .await?
            .ok_or(AccessError::IncorrectAccessCode)?;

        if grant.is_redeemed() {
            return Err(AccessError::IncorrectAccessCode);
        }

        // The store performs the consume atomically; losing a concurrent
        // redemption is the same as submitting an already-used code.
        let consumed = self.grant_repo.mark_redeemed(&grant.grant_id).await?;
        if !consumed {
            return Err(AccessError::IncorrectAccessCode);
        }

        let grant_token = build_grant_token(&grant.email, &self.config.grant_secret);

        tracing::info!(
            grant_id = %grant.grant_id,
            email = %grant.email,
            "Access code redeemed"
        );

        Ok(RedeemCodeOutput {
            email: grant.email.into_db(),
            grant_token,
        })
    }
}
