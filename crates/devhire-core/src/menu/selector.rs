// ============================================================================
// DevHire Core - Menu Link Selector
// File: crates/devhire-core/src/menu/selector.rs
// Description: Decision table for the signed-in user menu
// ============================================================================

use super::{MenuDecision, PrimaryLink, UserMenuContext};

/// Stateless decision over a [`UserMenuContext`].
pub struct MenuLinkSelector;

impl MenuLinkSelector {
    /// Evaluate the menu for one render. Pure and total.
    pub fn evaluate(context: UserMenuContext) -> MenuDecision {
        let primary_link = if context.has_business_profile {
            PrimaryLink::NewBusiness
        } else if context.has_developer_profile {
            PrimaryLink::NewDeveloper
        } else {
            PrimaryLink::NewRole
        };

        MenuDecision {
            primary_link,
            show_conversations_link: context.is_admin
                || context.has_any_conversation
                || context.has_business_profile,
            conversations_link_is_admin_scoped: context.is_admin,
            show_notifications_link: true,
            show_alert: context.has_unread_notification,
        }
    }
}
