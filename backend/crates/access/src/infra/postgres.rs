//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::AccessGrant;
use crate::domain::repository::GrantRepository;
use crate::domain::value_object::{access_code::AccessCode, email::Email};
use crate::error::{AccessError, AccessResult};
use kernel::id::GrantId;

/// PostgreSQL unique-violation SQLSTATE
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL-backed grant repository
#[derive(Clone)]
pub struct PgGrantRepository {
    pool: PgPool,
}

impl PgGrantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl GrantRepository for PgGrantRepository {
    async fn create(&self, grant: &AccessGrant) -> AccessResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO access_grants (
                grant_id,
                email,
                access_code,
                created_at,
                redeemed_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(grant.grant_id.as_uuid())
        .bind(grant.email.as_str())
        .bind(grant.access_code.as_str())
        .bind(grant.created_at)
        .bind(grant.redeemed_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            // The unique constraint is the only duplicate check
            Err(sqlx::Error::Database(e)) if e.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                Err(AccessError::DuplicateRequest)
            }
            Err(e) => Err(AccessError::Database(e)),
        }
    }

    async fn find_by_code(&self, code: &AccessCode) -> AccessResult<Option<AccessGrant>> {
        let row = sqlx::query_as::<_, GrantRow>(
            r#"
            SELECT
                grant_id,
                email,
                access_code,
                created_at,
                redeemed_at
            FROM access_grants
            WHERE access_code = $1
            "#,
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_grant()))
    }

    async fn find_by_email(&self, email: &Email) -> AccessResult<Option<AccessGrant>> {
        let row = sqlx::query_as::<_, GrantRow>(
            r#"
            SELECT
                grant_id,
                email,
                access_code,
                created_at,
                redeemed_at
            FROM access_grants
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_grant()))
    }

    async fn exists_by_email(&self, email: &Email) -> AccessResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM access_grants WHERE email = $1)",
        )
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn mark_redeemed(&self, grant_id: &GrantId) -> AccessResult<bool> {
        // The IS NULL guard makes the consume atomic; zero rows means a
        // concurrent redemption already took the code.
        let result = sqlx::query(
            r#"
            UPDATE access_grants SET
                redeemed_at = $2
            WHERE grant_id = $1 AND redeemed_at IS NULL
            "#,
        )
        .bind(grant_id.as_uuid())
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct GrantRow {
    grant_id: Uuid,
    email: String,
    access_code: String,
    created_at: DateTime<Utc>,
    redeemed_at: Option<DateTime<Utc>>,
}

impl GrantRow {
    fn into_grant(self) -> AccessGrant {
        AccessGrant {
            grant_id: GrantId::from_uuid(self.grant_id),
            email: Email::from_db(self.email),
            access_code: AccessCode::from_db(self.access_code),
            created_at: self.created_at,
            redeemed_at: self.redeemed_at,
        }
    }
}
