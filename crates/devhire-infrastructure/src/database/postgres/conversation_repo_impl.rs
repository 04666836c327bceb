// ============================================================================
// DevHire Infrastructure - PostgreSQL Conversation Repository
// File: crates/devhire-infrastructure/src/database/postgres/conversation_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

use devhire_core::error::DomainError;
use devhire_core::repositories::ConversationRepository;

pub struct PgConversationRepository {
    pool: PgPool,
}

impl PgConversationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConversationRepository for PgConversationRepository {
    async fn exists_for_business(&self, business_id: &Uuid) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM conversations WHERE business_id = $1)"
        )
        .bind(business_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error checking conversations for business {}: {}", business_id, e);
            DomainError::DatabaseError(e.to_string())
        })
    }

    async fn exists_for_developer(&self, developer_id: &Uuid) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM conversations WHERE developer_id = $1)"
        )
        .bind(developer_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error checking conversations for developer {}: {}", developer_id, e);
            DomainError::DatabaseError(e.to_string())
        })
    }
}
