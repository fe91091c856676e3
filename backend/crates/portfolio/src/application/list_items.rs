//! List Items Use Case

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entity::PortfolioItem;
use crate::domain::repository::ItemRepository;
use crate::error::PortfolioResult;

/// List items use case
pub struct ListItemsUseCase<R>
where
    R: ItemRepository,
{
    repo: Arc<R>,
}

impl<R> ListItemsUseCase<R>
where
    R: ItemRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// The caller's timeline, newest first
    pub async fn execute(&self, owner_user_id: Uuid) -> PortfolioResult<Vec<PortfolioItem>> {
        self.repo.list_for_user(owner_user_id).await
    }
}
