//! # DevHire Core - Domain Module
//! 
//! Domain entities for the DevHire application.

pub mod user;
pub mod profile;
pub mod conversation;
pub mod message_notification;

// Re-export all entities
pub use user::User;
pub use profile::{BusinessProfile, DeveloperProfile};
pub use conversation::Conversation;
pub use message_notification::MessageNotification;
