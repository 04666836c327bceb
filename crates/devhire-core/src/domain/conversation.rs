//! Conversation between a developer and a business

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: Uuid,
    pub developer_id: Uuid,
    pub business_id: Uuid,
    pub blocked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Conversation {
    pub fn new(developer_id: Uuid, business_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            developer_id,
            business_id,
            blocked_at: None,
            created_at: Utc::now(),
        }
    }

    /// Blocked conversations surface in the admin moderation view.
    pub fn is_blocked(&self) -> bool {
        self.blocked_at.is_some()
    }
}
