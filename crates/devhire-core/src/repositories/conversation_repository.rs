//! Conversation repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    async fn exists_for_business(&self, business_id: &Uuid) -> Result<bool, DomainError>;
    async fn exists_for_developer(&self, developer_id: &Uuid) -> Result<bool, DomainError>;
}
