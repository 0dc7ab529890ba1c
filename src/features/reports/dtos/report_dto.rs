use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::reports::models::{Report, ReportStatus};
use crate::features::reports::services::TimelineStep;

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ReportListQuery {
    /// Free-text search over title, description, category and city
    pub q: Option<String>,
    /// Filter chip label: All, a status label or a category
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatusBadgeDto {
    pub label: String,
    pub class: String,
}

impl From<ReportStatus> for StatusBadgeDto {
    fn from(status: ReportStatus) -> Self {
        Self {
            label: status.label().to_string(),
            class: status.badge_class().to_string(),
        }
    }
}

/// Report with its progress timeline
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReportDetailDto {
    pub report: Report,
    pub badge: StatusBadgeDto,
    pub timeline: Vec<TimelineStep>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateReportStatusDto {
    /// "Reported", "In Progress" or "Resolved"
    pub status: ReportStatus,
}

/// Payload for the platform share sheet
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ShareDto {
    pub title: String,
    pub text: String,
    pub url: String,
    /// Copied to the clipboard when no share sheet is available
    pub clipboard_fallback: String,
    pub fallback_message: String,
}

/// Filter chips for the recent-reports view, in display order
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FilterChipsDto {
    pub chips: Vec<String>,
}

/// Body of the JSON export download
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExportDto {
    pub reports: Vec<Report>,
}
