//! Domain services (business logic)

pub mod menu_service;
pub mod notification_service;

pub use menu_service::UserMenuService;
pub use notification_service::NotificationService;
