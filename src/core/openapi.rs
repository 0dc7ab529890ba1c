use utoipa::{Modify, OpenApi};

use crate::features::map::{dtos as map_dtos, handlers as map_handlers};
use crate::features::notifications::{
    dtos as notifications_dtos, handlers as notifications_handlers,
    models as notifications_models,
};
use crate::features::reports::services::{StatusCounts, TimelineStep};
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::features::submissions::{dtos as submissions_dtos, handlers as submissions_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Reports
        reports_handlers::list_reports,
        reports_handlers::submit_report,
        reports_handlers::get_stats,
        reports_handlers::get_filter_chips,
        reports_handlers::export_reports,
        reports_handlers::get_report,
        reports_handlers::update_report_status,
        reports_handlers::share_report,
        // Notifications
        notifications_handlers::list_notifications,
        notifications_handlers::get_unread_count,
        notifications_handlers::mark_notification_as_read,
        notifications_handlers::mark_all_notifications_as_read,
        // Map
        map_handlers::get_map,
        map_handlers::get_tile,
        // Submissions
        submissions_handlers::get_category_suggestions,
    ),
    components(
        schemas(
            Meta,
            // Reports
            reports_models::ReportStatus,
            reports_models::ReportSource,
            reports_models::Coordinate,
            reports_models::Report,
            StatusCounts,
            TimelineStep,
            reports_dtos::StatusBadgeDto,
            reports_dtos::ReportDetailDto,
            reports_dtos::UpdateReportStatusDto,
            reports_dtos::ShareDto,
            reports_dtos::FilterChipsDto,
            reports_dtos::ExportDto,
            ApiResponse<Vec<reports_models::Report>>,
            ApiResponse<reports_models::Report>,
            ApiResponse<reports_dtos::ReportDetailDto>,
            ApiResponse<reports_dtos::ShareDto>,
            ApiResponse<StatusCounts>,
            ApiResponse<reports_dtos::FilterChipsDto>,
            // Notifications
            notifications_models::Notification,
            notifications_dtos::NotificationListDto,
            notifications_dtos::UnreadCountDto,
            notifications_dtos::MarkAllReadDto,
            ApiResponse<notifications_dtos::NotificationListDto>,
            ApiResponse<notifications_dtos::UnreadCountDto>,
            ApiResponse<notifications_dtos::MarkAllReadDto>,
            // Map
            map_dtos::MarkerScheme,
            map_dtos::MarkerStyle,
            map_dtos::TileLayerDto,
            map_dtos::MarkerPopupDto,
            map_dtos::MapMarkerDto,
            map_dtos::CandidateMarkerDto,
            map_dtos::LegendEntryDto,
            map_dtos::MapViewDto,
            ApiResponse<map_dtos::MapViewDto>,
            // Submissions
            submissions_dtos::SubmitReportDto,
            submissions_dtos::LocationSource,
            submissions_dtos::SubmitReportResponseDto,
            submissions_dtos::SuggestionsDto,
            ApiResponse<submissions_dtos::SubmitReportResponseDto>,
            ApiResponse<submissions_dtos::SuggestionsDto>,
        )
    ),
    tags(
        (name = "reports", description = "Citizen issue reports"),
        (name = "notifications", description = "Report lifecycle notifications"),
        (name = "map", description = "Map views and tile proxy"),
        (name = "submissions", description = "Report form helpers"),
    ),
    info(
        title = "Civic Radar API",
        version = "0.1.0",
        description = "API documentation for Civic Radar",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/reports",
            "/api/reports/filters",
            "/api/reports/{id}/status",
            "/api/notifications/read-all",
            "/api/map/tiles/{z}/{x}/{y}",
            "/api/categories/suggestions",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Radar".to_string(),
            version: "9".to_string(),
            description: "d".to_string(),
        }
        .modify(&mut doc);
        assert_eq!(doc.info.title, "Radar");
        assert_eq!(doc.info.description.as_deref(), Some("d"));
    }
}
