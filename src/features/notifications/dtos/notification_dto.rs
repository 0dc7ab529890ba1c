use serde::Serialize;
use utoipa::ToSchema;

use crate::features::notifications::models::Notification;

/// Notification list, newest first, with the derived unread count
#[derive(Debug, Serialize, ToSchema)]
pub struct NotificationListDto {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UnreadCountDto {
    pub unread_count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MarkAllReadDto {
    /// How many notifications flipped from unread to read
    pub marked: usize,
    pub unread_count: usize,
}
