// ============================================================================
// DevHire API - Notification Handlers
// File: crates/devhire-api/src/handlers/notifications.rs
// ============================================================================
//! Unread and read message notification listings, and acknowledging one

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use devhire_core::domain::MessageNotification;
use devhire_core::services::NotificationService;
use devhire_shared::Pagination;

use crate::auth::CurrentUser;
use crate::error::ApiError;
use crate::extract::PageQuery;
use crate::response::ApiResponse;

/// Notification DTO for responses
#[derive(Debug, Serialize)]
pub struct NotificationDto {
    pub id: Uuid,
    pub message_id: Uuid,
    pub conversation_id: Uuid,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<MessageNotification> for NotificationDto {
    fn from(n: MessageNotification) -> Self {
        Self {
            id: n.id,
            message_id: n.message_id,
            conversation_id: n.conversation_id,
            read_at: n.read_at,
            created_at: n.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NotificationListResponse {
    pub notifications: Vec<NotificationDto>,
    pub page: u32,
    pub per_page: u32,
}

impl NotificationListResponse {
    fn new(notifications: Vec<MessageNotification>, page: &Pagination) -> Self {
        Self {
            notifications: notifications.into_iter().map(NotificationDto::from).collect(),
            page: page.page,
            per_page: page.per_page,
        }
    }
}

/// Unread notifications - GET /api/v1/notifications
pub async fn list_unread(
    State(service): State<Arc<NotificationService>>,
    CurrentUser(user): CurrentUser,
    PageQuery(page): PageQuery,
) -> Result<Json<ApiResponse<NotificationListResponse>>, ApiError> {
    let notifications = service.unread(&user.id, &page).await?;
    Ok(Json(ApiResponse::success(NotificationListResponse::new(notifications, &page))))
}

/// Read notifications - GET /api/v1/notifications/read
pub async fn list_read(
    State(service): State<Arc<NotificationService>>,
    CurrentUser(user): CurrentUser,
    PageQuery(page): PageQuery,
) -> Result<Json<ApiResponse<NotificationListResponse>>, ApiError> {
    let notifications = service.read(&user.id, &page).await?;
    Ok(Json(ApiResponse::success(NotificationListResponse::new(notifications, &page))))
}

/// Mark as read - POST /api/v1/notifications/{id}/read
pub async fn mark_read(
    State(service): State<Arc<NotificationService>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<NotificationDto>>, ApiError> {
    let notification = service.mark_read(&user.id, &id).await?;
    Ok(Json(ApiResponse::success(notification.into())))
}
