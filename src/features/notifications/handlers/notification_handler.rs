use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::notifications::dtos::{MarkAllReadDto, NotificationListDto, UnreadCountDto};
use crate::features::reports::services::ReportService;
use crate::shared::types::{ApiResponse, Meta};

/// List notifications with the unread count
#[utoipa::path(
    get,
    path = "/api/notifications",
    responses(
        (status = 200, description = "Notifications, newest first", body = ApiResponse<NotificationListDto>)
    ),
    tag = "notifications"
)]
pub async fn list_notifications(
    State(service): State<Arc<ReportService>>,
) -> Result<Json<ApiResponse<NotificationListDto>>> {
    let (notifications, unread_count) = service.notifications().await;
    let total = notifications.len();
    Ok(Json(ApiResponse::success(
        Some(NotificationListDto {
            notifications,
            unread_count,
        }),
        None,
        Some(Meta::total(total)),
    )))
}

#[utoipa::path(
    get,
    path = "/api/notifications/unread-count",
    responses(
        (status = 200, description = "Unread notification count", body = ApiResponse<UnreadCountDto>)
    ),
    tag = "notifications"
)]
pub async fn get_unread_count(
    State(service): State<Arc<ReportService>>,
) -> Result<Json<ApiResponse<UnreadCountDto>>> {
    let unread_count = service.unread_notifications_count().await;
    Ok(Json(ApiResponse::success(
        Some(UnreadCountDto { unread_count }),
        None,
        None,
    )))
}

/// Mark one notification as read
///
/// An unknown id is not an error: the envelope is successful with no data.
#[utoipa::path(
    patch,
    path = "/api/notifications/{id}/read",
    params(
        ("id" = String, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification marked as read (data is null when the id is unknown)", body = ApiResponse<UnreadCountDto>),
        (status = 500, description = "Failed to persist data")
    ),
    tag = "notifications"
)]
pub async fn mark_notification_as_read(
    State(service): State<Arc<ReportService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<UnreadCountDto>>> {
    let Some(unread_count) = service.mark_notification_as_read(&id).await? else {
        return Ok(Json(ApiResponse::success(
            None,
            Some(format!("Notification {} not found", id)),
            None,
        )));
    };

    Ok(Json(ApiResponse::success(
        Some(UnreadCountDto { unread_count }),
        Some("Notification marked as read".to_string()),
        None,
    )))
}

#[utoipa::path(
    post,
    path = "/api/notifications/read-all",
    responses(
        (status = 200, description = "All notifications marked as read", body = ApiResponse<MarkAllReadDto>),
        (status = 500, description = "Failed to persist data")
    ),
    tag = "notifications"
)]
pub async fn mark_all_notifications_as_read(
    State(service): State<Arc<ReportService>>,
) -> Result<Json<ApiResponse<MarkAllReadDto>>> {
    let (marked, unread_count) = service.mark_all_notifications_as_read().await?;
    Ok(Json(ApiResponse::success(
        Some(MarkAllReadDto {
            marked,
            unread_count,
        }),
        Some("All notifications marked as read".to_string()),
        None,
    )))
}
