//! # DevHire Core
//! 
//! Domain entities, the signed-in menu decision, services, and repository traits.

pub mod domain;
pub mod menu;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use menu::{MenuDecision, MenuLinkSelector, PrimaryLink, UserMenuContext};
pub use error::DomainError;
