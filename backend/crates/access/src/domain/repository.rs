//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::AccessGrant;
use crate::domain::value_object::{access_code::AccessCode, email::Email};
use crate::error::AccessResult;
use kernel::id::GrantId;

/// Access grant repository trait
#[trait_variant::make(GrantRepository: Send)]
pub trait LocalGrantRepository {
    /// Persist a new grant. The email unique constraint is the sole
    /// source of truth for "already requested"; a duplicate insert must
    /// surface as `AccessError::DuplicateRequest`.
    async fn create(&self, grant: &AccessGrant) -> AccessResult<()>;

    /// Find a grant by its access code
    async fn find_by_code(&self, code: &AccessCode) -> AccessResult<Option<AccessGrant>>;

    /// Find a grant by requester email
    async fn find_by_email(&self, email: &Email) -> AccessResult<Option<AccessGrant>>;

    /// Check if a grant exists for this email
    async fn exists_by_email(&self, email: &Email) -> AccessResult<bool>;

    /// Record that the grant's code was redeemed. Returns whether this
    /// call consumed the code; `false` means another redemption won.
    async fn mark_redeemed(&self, grant_id: &GrantId) -> AccessResult<bool>;
}
