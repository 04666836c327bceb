use std::sync::Arc;
use axum::extract::FromRef;

use devhire_core::repositories::UserRepository;
use devhire_core::services::{NotificationService, UserMenuService};
use devhire_security::JwtService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub jwt: Arc<JwtService>,
    pub users: Arc<dyn UserRepository>,
    pub menu_service: Arc<UserMenuService>,
    pub notification_service: Arc<NotificationService>,
}

impl FromRef<AppState> for Arc<UserMenuService> {
    fn from_ref(state: &AppState) -> Self {
        state.menu_service.clone()
    }
}

impl FromRef<AppState> for Arc<NotificationService> {
    fn from_ref(state: &AppState) -> Self {
        state.notification_service.clone()
    }
}
