//! Signed-in user menu: context snapshot, decision, and the selector between them.

pub mod selector;

use serde::{Deserialize, Serialize};

pub use selector::MenuLinkSelector;

/// Per-render snapshot of the record checks the menu depends on.
///
/// Absent records read as `false`, so `Default` is a signed-in user who has
/// not onboarded yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMenuContext {
    pub has_business_profile: bool,
    pub has_developer_profile: bool,
    pub is_admin: bool,
    pub has_any_conversation: bool,
    pub has_unread_notification: bool,
}

/// Primary call-to-action of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryLink {
    NewBusiness,
    NewDeveloper,
    NewRole,
}

impl PrimaryLink {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimaryLink::NewBusiness => "new_business",
            PrimaryLink::NewDeveloper => "new_developer",
            PrimaryLink::NewRole => "new_role",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuDecision {
    pub primary_link: PrimaryLink,
    pub show_conversations_link: bool,
    /// Conversations link targets the admin moderation view.
    pub conversations_link_is_admin_scoped: bool,
    pub show_notifications_link: bool,
    pub show_alert: bool,
}
