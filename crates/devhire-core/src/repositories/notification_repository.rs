//! Message notification repository trait (port)

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;
use devhire_shared::Pagination;
use crate::domain::MessageNotification;
use crate::error::DomainError;

/// Listings are ordered newest first.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<MessageNotification>, DomainError>;
    async fn list_read(&self, recipient_id: &Uuid, page: &Pagination) -> Result<Vec<MessageNotification>, DomainError>;
    async fn list_unread(&self, recipient_id: &Uuid, page: &Pagination) -> Result<Vec<MessageNotification>, DomainError>;
    async fn has_unread(&self, recipient_id: &Uuid) -> Result<bool, DomainError>;
    async fn mark_as_read(&self, id: &Uuid, read_at: DateTime<Utc>) -> Result<MessageNotification, DomainError>;
}
