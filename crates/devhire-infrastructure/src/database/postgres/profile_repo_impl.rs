// ============================================================================
// DevHire Infrastructure - PostgreSQL Profile Repository
// File: crates/devhire-infrastructure/src/database/postgres/profile_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::error;
use uuid::Uuid;

use devhire_core::domain::{BusinessProfile, DeveloperProfile};
use devhire_core::error::DomainError;
use devhire_core::repositories::ProfileRepository;

pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BusinessRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub company: String,
    pub created_at: DateTime<Utc>,
}

impl From<BusinessRow> for BusinessProfile {
    fn from(row: BusinessRow) -> Self {
        BusinessProfile {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            company: row.company,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct DeveloperRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub hero: String,
    pub created_at: DateTime<Utc>,
}

impl From<DeveloperRow> for DeveloperProfile {
    fn from(row: DeveloperRow) -> Self {
        DeveloperProfile {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            hero: row.hero,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    async fn find_business_by_user(&self, user_id: &Uuid) -> Result<Option<BusinessProfile>, DomainError> {
        let row: Option<BusinessRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, name, company, created_at
            FROM businesses
            WHERE user_id = $1
            "#
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding business for user {}: {}", user_id, e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_developer_by_user(&self, user_id: &Uuid) -> Result<Option<DeveloperProfile>, DomainError> {
        let row: Option<DeveloperRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, name, hero, created_at
            FROM developers
            WHERE user_id = $1
            "#
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding developer for user {}: {}", user_id, e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }
}
