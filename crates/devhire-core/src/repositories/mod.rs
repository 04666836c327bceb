//! Repository traits (ports)

pub mod user_repository;
pub mod profile_repository;
pub mod conversation_repository;
pub mod notification_repository;

pub use user_repository::UserRepository;
pub use profile_repository::ProfileRepository;
pub use conversation_repository::ConversationRepository;
pub use notification_repository::NotificationRepository;

#[cfg(test)]
pub use profile_repository::MockProfileRepository;
#[cfg(test)]
pub use conversation_repository::MockConversationRepository;
#[cfg(test)]
pub use notification_repository::MockNotificationRepository;
