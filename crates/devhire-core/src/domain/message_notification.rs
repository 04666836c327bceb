// ============================================================================
// DevHire Core - Message Notification Entity
// File: crates/devhire-core/src/domain/message_notification.rs
// Description: Read/unread marker of a message for its recipient
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Message notification entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageNotification {
    pub id: Uuid,
    pub recipient_id: Uuid,
    pub message_id: Uuid,
    pub conversation_id: Uuid,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl MessageNotification {
    pub fn new(recipient_id: Uuid, message_id: Uuid, conversation_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            recipient_id,
            message_id,
            conversation_id,
            read_at: None,
            created_at: Utc::now(),
        }
    }

    pub fn is_read(&self) -> bool {
        self.read_at.is_some()
    }

    /// Keeps the first read timestamp if already read.
    pub fn mark_as_read(&mut self, at: DateTime<Utc>) {
        if self.read_at.is_none() {
            self.read_at = Some(at);
        }
    }

    pub fn belongs_to(&self, user_id: &Uuid) -> bool {
        self.recipient_id == *user_id
    }
}
