// ============================================================================
// DevHire Core - User Menu Service
// File: crates/devhire-core/src/services/menu_service.rs
// ============================================================================
//! Gathers the record checks behind the signed-in menu and evaluates it

use std::sync::Arc;
use tracing::debug;

use crate::domain::User;
use crate::error::DomainError;
use crate::menu::{MenuDecision, MenuLinkSelector, UserMenuContext};
use crate::repositories::{ConversationRepository, NotificationRepository, ProfileRepository};

pub struct UserMenuService {
    profiles: Arc<dyn ProfileRepository>,
    conversations: Arc<dyn ConversationRepository>,
    notifications: Arc<dyn NotificationRepository>,
}

impl UserMenuService {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        conversations: Arc<dyn ConversationRepository>,
        notifications: Arc<dyn NotificationRepository>,
    ) -> Self {
        Self {
            profiles,
            conversations,
            notifications,
        }
    }

    /// Build the menu context for an authenticated user
    pub async fn context_for(&self, user: &User) -> Result<UserMenuContext, DomainError> {
        let business = self.profiles.find_business_by_user(&user.id).await?;
        let developer = self.profiles.find_developer_by_user(&user.id).await?;

        // Conversations are keyed by profile, so check each side the user has.
        let mut has_any_conversation = false;
        if let Some(business) = &business {
            has_any_conversation = self.conversations.exists_for_business(&business.id).await?;
        }
        if !has_any_conversation {
            if let Some(developer) = &developer {
                has_any_conversation = self.conversations.exists_for_developer(&developer.id).await?;
            }
        }

        let context = UserMenuContext {
            has_business_profile: business.is_some(),
            has_developer_profile: developer.is_some(),
            is_admin: user.is_admin,
            has_any_conversation,
            has_unread_notification: self.notifications.has_unread(&user.id).await?,
        };

        debug!("Menu context for user {}: {:?}", user.id, context);
        Ok(context)
    }

    pub async fn menu_for(&self, user: &User) -> Result<MenuDecision, DomainError> {
        let context = self.context_for(user).await?;
        Ok(MenuLinkSelector::evaluate(context))
    }
}
