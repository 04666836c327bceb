//! # DevHire API
//! 
//! HTTP handlers, authentication extractor, response envelope, and menu rendering.

pub mod auth;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod response;
pub mod router;
pub mod state;
pub mod view;

pub use router::build_router;
pub use state::AppState;
