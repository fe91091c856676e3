//! Add Item Use Case
//!
//! Creates a timeline entry for the authenticated user. Validation failures
//! are collected before reporting so the form can show all problems at once.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entity::{DESCRIPTION_MIN_LENGTH, PortfolioItem, TITLE_MIN_LENGTH};
use crate::domain::repository::ItemRepository;
use crate::domain::value_object::item_type::ItemType;
use crate::error::{PortfolioError, PortfolioResult};

/// Add item input
pub struct AddItemInput {
    /// Owner resolved from the session, never from the request body
    pub owner_user_id: Uuid,
    pub title: String,
    pub description: String,
    pub item_type: String,
}

/// Add item output
#[derive(Debug)]
pub struct AddItemOutput {
    pub success: String,
    pub redirect: String,
}

/// Add item use case
pub struct AddItemUseCase<R>
where
    R: ItemRepository,
{
    repo: Arc<R>,
}

impl<R> AddItemUseCase<R>
where
    R: ItemRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: AddItemInput) -> PortfolioResult<AddItemOutput> {
        // Collect every validation failure before reporting
        let mut reasons = Vec::new();

        let title = input.title.trim();
        if title.is_empty() {
            reasons.push("Item title cannot be empty".to_string());
        } else if title.chars().count() < TITLE_MIN_LENGTH {
            reasons.push(format!(
                "Item title must be at least {TITLE_MIN_LENGTH} characters long"
            ));
        }

        let description = input.description.trim();
        if description.is_empty() {
            reasons.push("Item description cannot be empty".to_string());
        } else if description.chars().count() < DESCRIPTION_MIN_LENGTH {
            reasons.push(format!(
                "Item description must be at least {DESCRIPTION_MIN_LENGTH} characters long"
            ));
        }

        let item_type = match ItemType::parse(&input.item_type) {
            Ok(item_type) => Some(item_type),
            Err(e) => {
                reasons.push(e.to_string());
                None
            }
        };

        if !reasons.is_empty() {
            return Err(PortfolioError::Validation(reasons));
        }

        let item = PortfolioItem::new(
            input.owner_user_id,
            title.to_string(),
            description.to_string(),
            item_type.expect("validated above"),
        );

        self.repo.create(&item).await?;

        tracing::info!(
            item_id = %item.item_id,
            owner = %item.owner_user_id,
            item_type = %item.item_type,
            "Portfolio item added"
        );

        Ok(AddItemOutput {
            success: "Item added to your timeline.".to_string(),
            redirect: "/timeline".to_string(),
        })
    }
}
