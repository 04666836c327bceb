//! Signed-in user menu handler

use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::info;

use devhire_core::services::UserMenuService;

use crate::auth::CurrentUser;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::view::MenuView;

/// Menu handler - GET /api/v1/menu
pub async fn user_menu(
    State(menu_service): State<Arc<UserMenuService>>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<ApiResponse<MenuView>>, ApiError> {
    let decision = menu_service.menu_for(&user).await?;
    info!(
        "Menu for user {}: primary={} alert={}",
        user.id,
        decision.primary_link.as_str(),
        decision.show_alert
    );

    Ok(Json(ApiResponse::success(MenuView::render(&decision))))
}
