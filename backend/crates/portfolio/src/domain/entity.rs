//! Portfolio Item Entity

use chrono::{DateTime, Utc};
use kernel::id::Id;
use uuid::Uuid;

use crate::domain::value_object::item_type::ItemType;

/// Marker for portfolio-item IDs
pub struct ItemMarker;

/// Identifies one portfolio item
pub type ItemId = Id<ItemMarker>;

/// Minimum title length (in characters)
pub const TITLE_MIN_LENGTH: usize = 5;

/// Minimum description length (in characters)
pub const DESCRIPTION_MIN_LENGTH: usize = 10;

/// One entry on a user's portfolio timeline. Immutable after creation.
#[derive(Debug, Clone)]
pub struct PortfolioItem {
    pub item_id: ItemId,
    /// Account that created the item; only the owner sees it listed
    pub owner_user_id: Uuid,
    pub title: String,
    pub description: String,
    pub item_type: ItemType,
    pub created_at: DateTime<Utc>,
}

impl PortfolioItem {
    /// Create a new item. Callers validate field lengths first.
    pub fn new(owner_user_id: Uuid, title: String, description: String, item_type: ItemType) -> Self {
        Self {
            item_id: ItemId::new(),
            owner_user_id,
            title,
            description,
            item_type,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_belongs_to_owner() {
        let owner = Uuid::new_v4();
        let item = PortfolioItem::new(
            owner,
            "Intern at Acme".to_string(),
            "Summer internship on the billing team".to_string(),
            ItemType::WorkExperience,
        );

        assert_eq!(item.owner_user_id, owner);
        assert_eq!(item.item_type, ItemType::WorkExperience);
        assert_eq!(item.item_id.as_uuid().get_version_num(), 4);
    }
}
