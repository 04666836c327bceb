// ============================================================================
// DevHire Infrastructure - PostgreSQL Message Notification Repository
// File: crates/devhire-infrastructure/src/database/postgres/notification_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{debug, error};
use uuid::Uuid;

use devhire_core::domain::MessageNotification;
use devhire_core::error::DomainError;
use devhire_core::repositories::NotificationRepository;
use devhire_shared::Pagination;

pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MessageNotificationRow {
    pub id: Uuid,
    pub recipient_id: Uuid,
    pub message_id: Uuid,
    pub conversation_id: Uuid,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<MessageNotificationRow> for MessageNotification {
    fn from(row: MessageNotificationRow) -> Self {
        MessageNotification {
            id: row.id,
            recipient_id: row.recipient_id,
            message_id: row.message_id,
            conversation_id: row.conversation_id,
            read_at: row.read_at,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<MessageNotification>, DomainError> {
        let row: Option<MessageNotificationRow> = sqlx::query_as(
            r#"
            SELECT id, recipient_id, message_id, conversation_id, read_at, created_at
            FROM message_notifications
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding notification {}: {}", id, e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn list_read(&self, recipient_id: &Uuid, page: &Pagination) -> Result<Vec<MessageNotification>, DomainError> {
        let rows: Vec<MessageNotificationRow> = sqlx::query_as(
            r#"
            SELECT id, recipient_id, message_id, conversation_id, read_at, created_at
            FROM message_notifications
            WHERE recipient_id = $1 AND read_at IS NOT NULL
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#
        )
        .bind(recipient_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing read notifications: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        debug!("Found {} read notifications for user {}", rows.len(), recipient_id);
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_unread(&self, recipient_id: &Uuid, page: &Pagination) -> Result<Vec<MessageNotification>, DomainError> {
        let rows: Vec<MessageNotificationRow> = sqlx::query_as(
            r#"
            SELECT id, recipient_id, message_id, conversation_id, read_at, created_at
            FROM message_notifications
            WHERE recipient_id = $1 AND read_at IS NULL
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#
        )
        .bind(recipient_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing unread notifications: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        debug!("Found {} unread notifications for user {}", rows.len(), recipient_id);
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn has_unread(&self, recipient_id: &Uuid) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM message_notifications WHERE recipient_id = $1 AND read_at IS NULL)"
        )
        .bind(recipient_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error checking unread notifications: {}", e);
            DomainError::DatabaseError(e.to_string())
        })
    }

    async fn mark_as_read(&self, id: &Uuid, read_at: DateTime<Utc>) -> Result<MessageNotification, DomainError> {
        let row: Option<MessageNotificationRow> = sqlx::query_as(
            r#"
            UPDATE message_notifications
            SET read_at = COALESCE(read_at, $2)
            WHERE id = $1
            RETURNING id, recipient_id, message_id, conversation_id, read_at, created_at
            "#
        )
        .bind(id)
        .bind(read_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error marking notification {} as read: {}", id, e);
            DomainError::DatabaseError(e.to_string())
        })?;

        row.map(Into::into).ok_or(DomainError::NotificationNotFound(*id))
    }
}
