//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::PortfolioItem;
use crate::domain::value_object::item_type::ItemType;

// ============================================================================
// Add Item
// ============================================================================

/// Item form submission
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub title: String,
    pub item_description: String,
    pub item_type: String,
}

/// Item creation response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemResponse {
    pub success: String,
    pub redirect: String,
}

// ============================================================================
// Get Items
// ============================================================================

/// One timeline entry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub item_id: Uuid,
    pub title: String,
    pub item_description: String,
    pub item_type: ItemType,
    pub created_at: DateTime<Utc>,
}

impl From<PortfolioItem> for ItemDto {
    fn from(item: PortfolioItem) -> Self {
        Self {
            item_id: item.item_id.into_uuid(),
            title: item.title,
            item_description: item.description,
            item_type: item.item_type,
            created_at: item.created_at,
        }
    }
}
