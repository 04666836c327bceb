//! PostgreSQL repository implementations

pub mod user_repo_impl;
pub mod profile_repo_impl;
pub mod conversation_repo_impl;
pub mod notification_repo_impl;

pub use user_repo_impl::PgUserRepository;
pub use profile_repo_impl::PgProfileRepository;
pub use conversation_repo_impl::PgConversationRepository;
pub use notification_repo_impl::PgNotificationRepository;
