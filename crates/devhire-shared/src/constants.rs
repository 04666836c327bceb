//! Application-wide constants

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;
pub const TOKEN_TYPE_ACCESS: &str = "access";
pub const TOKEN_TYPE_REFRESH: &str = "refresh";
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 900;
pub const DEFAULT_REFRESH_TOKEN_EXPIRY: i64 = 604800;
pub const PLACEHOLDER_JWT_SECRET: &str = "change-me";
pub const MIN_PRODUCTION_SECRET_LENGTH: usize = 32;

/// DOM id of the unread-notification marker in the signed-in menu.
pub const NOTIFICATION_ALERT_ELEMENT_ID: &str = "notification-alert";
