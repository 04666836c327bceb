// ============================================================================
// DevHire Core - Notification Service
// File: crates/devhire-core/src/services/notification_service.rs
// ============================================================================
//! Listing and acknowledging a user's message notifications

use std::sync::Arc;
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use devhire_shared::Pagination;

use crate::domain::MessageNotification;
use crate::error::DomainError;
use crate::repositories::NotificationRepository;

pub struct NotificationService {
    notifications: Arc<dyn NotificationRepository>,
}

impl NotificationService {
    pub fn new(notifications: Arc<dyn NotificationRepository>) -> Self {
        Self { notifications }
    }

    /// Notifications the user has already read, newest first
    pub async fn read(&self, user_id: &Uuid, page: &Pagination) -> Result<Vec<MessageNotification>, DomainError> {
        page.validate()?;
        self.notifications.list_read(user_id, page).await
    }

    /// Notifications still waiting for the user, newest first
    pub async fn unread(&self, user_id: &Uuid, page: &Pagination) -> Result<Vec<MessageNotification>, DomainError> {
        page.validate()?;
        self.notifications.list_unread(user_id, page).await
    }

    /// Mark one of the user's notifications as read.
    ///
    /// Another user's notification is reported as not found.
    pub async fn mark_read(&self, user_id: &Uuid, notification_id: &Uuid) -> Result<MessageNotification, DomainError> {
        let notification = self
            .notifications
            .find_by_id(notification_id)
            .await?
            .filter(|n| n.belongs_to(user_id))
            .ok_or_else(|| {
                warn!("Notification {} not found for user {}", notification_id, user_id);
                DomainError::NotificationNotFound(*notification_id)
            })?;

        if notification.is_read() {
            return Ok(notification);
        }

        let updated = self.notifications.mark_as_read(notification_id, Utc::now()).await?;
        info!("Notification {} marked as read by user {}", notification_id, user_id);
        Ok(updated)
    }
}
