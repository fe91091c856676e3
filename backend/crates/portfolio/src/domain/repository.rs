//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use uuid::Uuid;

use crate::domain::entity::PortfolioItem;
use crate::error::PortfolioResult;

/// Portfolio item repository trait
#[trait_variant::make(ItemRepository: Send)]
pub trait LocalItemRepository {
    /// Persist a new item
    async fn create(&self, item: &PortfolioItem) -> PortfolioResult<()>;

    /// All items owned by this user, newest first
    async fn list_for_user(&self, owner_user_id: Uuid) -> PortfolioResult<Vec<PortfolioItem>>;
}
