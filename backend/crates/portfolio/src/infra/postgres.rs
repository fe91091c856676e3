//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{ItemId, PortfolioItem};
use crate::domain::repository::ItemRepository;
use crate::domain::value_object::item_type::ItemType;
use crate::error::{PortfolioError, PortfolioResult};

/// PostgreSQL-backed item repository
#[derive(Clone)]
pub struct PgItemRepository {
    pool: PgPool,
}

impl PgItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ItemRepository for PgItemRepository {
    async fn create(&self, item: &PortfolioItem) -> PortfolioResult<()> {
        sqlx::query(
            r#"
            INSERT INTO portfolio_items (
                item_id,
                owner_user_id,
                title,
                description,
                item_type,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(item.item_id.as_uuid())
        .bind(item.owner_user_id)
        .bind(&item.title)
        .bind(&item.description)
        .bind(item.item_type.as_str())
        .bind(item.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_for_user(&self, owner_user_id: Uuid) -> PortfolioResult<Vec<PortfolioItem>> {
        let rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT
                item_id,
                owner_user_id,
                title,
                description,
                item_type,
                created_at
            FROM portfolio_items
            WHERE owner_user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_item()).collect()
    }
}

#[derive(sqlx::FromRow)]
struct ItemRow {
    item_id: Uuid,
    owner_user_id: Uuid,
    title: String,
    description: String,
    item_type: String,
    created_at: DateTime<Utc>,
}

impl ItemRow {
    fn into_item(self) -> PortfolioResult<PortfolioItem> {
        let item_type = ItemType::parse(&self.item_type)
            .map_err(|e| PortfolioError::Internal(format!("Corrupt item row: {e}")))?;

        Ok(PortfolioItem {
            item_id: ItemId::from_uuid(self.item_id),
            owner_user_id: self.owner_user_id,
            title: self.title,
            description: self.description,
            item_type,
            created_at: self.created_at,
        })
    }
}
