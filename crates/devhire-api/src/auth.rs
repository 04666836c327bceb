// ============================================================================
// DevHire API - Authentication Extractor
// File: crates/devhire-api/src/auth.rs
// ============================================================================
//! Resolves the signed-in user from an `Authorization: Bearer` header

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::{debug, warn};

use devhire_core::domain::User;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated user; handlers taking this reject anonymous requests with 401.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .ok_or_else(|| ApiError::Unauthorized("missing bearer token".to_string()))?;

        let claims = state.jwt.validate_access_token(token)?;
        let user_id = claims.user_id()?;

        let user = state.users.find_by_id(&user_id).await?.ok_or_else(|| {
            warn!("Token subject {} no longer exists", user_id);
            ApiError::Unauthorized(format!("unknown user {}", user_id))
        })?;

        debug!("Authenticated user {}", user.id);
        Ok(CurrentUser(user))
    }
}

/// Token from `Authorization: Bearer <token>`; the scheme is case-insensitive.
fn bearer_token(parts: &Parts) -> Option<&str> {
    let value = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
