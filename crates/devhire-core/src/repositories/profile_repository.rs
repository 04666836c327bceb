//! Profile repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::{BusinessProfile, DeveloperProfile};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_business_by_user(&self, user_id: &Uuid) -> Result<Option<BusinessProfile>, DomainError>;
    async fn find_developer_by_user(&self, user_id: &Uuid) -> Result<Option<DeveloperProfile>, DomainError>;
}
