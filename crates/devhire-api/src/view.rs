// ============================================================================
// DevHire API - Menu View
// File: crates/devhire-api/src/view.rs
// Description: Renders a MenuDecision into named links for the navigation bar
// ============================================================================

use serde::Serialize;

use devhire_core::menu::{MenuDecision, PrimaryLink};
use devhire_shared::constants::NOTIFICATION_ALERT_ELEMENT_ID;

/// Named application routes the menu can link to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    NewBusiness,
    NewDeveloper,
    NewRole,
    Conversations,
    AdminConversations,
    Notifications,
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::NewBusiness => "new_business",
            Route::NewDeveloper => "new_developer",
            Route::NewRole => "new_role",
            Route::Conversations => "conversations",
            Route::AdminConversations => "admin_conversations",
            Route::Notifications => "notifications",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::NewBusiness => "/businesses/new",
            Route::NewDeveloper => "/developers/new",
            Route::NewRole => "/role/new",
            Route::Conversations => "/conversations",
            Route::AdminConversations => "/admin/conversations",
            Route::Notifications => "/notifications",
        }
    }
}

impl From<PrimaryLink> for Route {
    fn from(link: PrimaryLink) -> Self {
        match link {
            PrimaryLink::NewBusiness => Route::NewBusiness,
            PrimaryLink::NewDeveloper => Route::NewDeveloper,
            PrimaryLink::NewRole => Route::NewRole,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkView {
    pub name: &'static str,
    pub href: &'static str,
}

impl From<Route> for LinkView {
    fn from(route: Route) -> Self {
        Self { name: route.name(), href: route.path() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertMarker {
    pub element_id: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuView {
    pub primary_link: LinkView,
    /// Primary link, conversations link when shown, then notifications.
    pub links: Vec<LinkView>,
    pub alert: Option<AlertMarker>,
}

impl MenuView {
    pub fn render(decision: &MenuDecision) -> Self {
        let primary_link = LinkView::from(Route::from(decision.primary_link));
        let mut links = vec![primary_link.clone()];

        if decision.show_conversations_link {
            let route = if decision.conversations_link_is_admin_scoped {
                Route::AdminConversations
            } else {
                Route::Conversations
            };
            links.push(route.into());
        }
        if decision.show_notifications_link {
            links.push(Route::Notifications.into());
        }

        Self {
            primary_link,
            links,
            alert: decision.show_alert.then_some(AlertMarker {
                element_id: NOTIFICATION_ALERT_ELEMENT_ID,
            }),
        }
    }
}
