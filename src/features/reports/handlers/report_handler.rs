use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::reports::dtos::{
    ExportDto, FilterChipsDto, ReportDetailDto, ReportListQuery, ShareDto, StatusBadgeDto, UpdateReportStatusDto,
};
use crate::features::reports::models::Report;
use crate::features::reports::services::browse::status_timeline;
use crate::features::reports::services::share::{export_document, share_payload};
use crate::features::reports::services::{ReportFilter, ReportService, StatusCounts, FILTER_CHIPS};
use crate::features::submissions::dtos::{SubmitReportDto, SubmitReportResponseDto};
use crate::features::submissions::services::SubmissionService;
use crate::shared::constants::EXPORT_FILENAME;
use crate::shared::types::{ApiResponse, Meta};

/// State for report handlers
#[derive(Clone)]
pub struct ReportState {
    pub report_service: Arc<ReportService>,
    pub submission_service: Arc<SubmissionService>,
    /// Base URL of the web app, used for share links
    pub frontend_url: Arc<str>,
}

/// Search and filter reports, newest first
#[utoipa::path(
    get,
    path = "/api/reports",
    params(ReportListQuery),
    responses(
        (status = 200, description = "Matching reports", body = ApiResponse<Vec<Report>>)
    ),
    tag = "reports"
)]
pub async fn list_reports(
    State(state): State<ReportState>,
    Query(query): Query<ReportListQuery>,
) -> Result<Json<ApiResponse<Vec<Report>>>> {
    let filter = ReportFilter::parse(query.filter.as_deref());
    let reports = state
        .report_service
        .search(query.q.as_deref().unwrap_or_default(), &filter)
        .await;
    let total = reports.len();
    Ok(Json(ApiResponse::success(
        Some(reports),
        None,
        Some(Meta::total(total)),
    )))
}

/// Submit a new report
///
/// The location comes from the photo's GPS metadata when present, then from
/// the map pick, then from the configured default.
#[utoipa::path(
    post,
    path = "/api/reports",
    request_body = SubmitReportDto,
    responses(
        (status = 201, description = "Report submitted", body = ApiResponse<SubmitReportResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Failed to persist data")
    ),
    tag = "reports"
)]
pub async fn submit_report(
    State(state): State<ReportState>,
    AppJson(dto): AppJson<SubmitReportDto>,
) -> Result<impl IntoResponse> {
    let created = state.submission_service.submit(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(created),
            Some("Report submitted successfully!".to_string()),
            None,
        )),
    ))
}

/// Report counts per status
#[utoipa::path(
    get,
    path = "/api/reports/stats",
    responses(
        (status = 200, description = "Status counts", body = ApiResponse<StatusCounts>)
    ),
    tag = "reports"
)]
pub async fn get_stats(State(state): State<ReportState>) -> Result<Json<ApiResponse<StatusCounts>>> {
    let counts = state.report_service.stats().await;
    Ok(Json(ApiResponse::success(Some(counts), None, None)))
}

/// Filter chips accepted by the `filter` query parameter
#[utoipa::path(
    get,
    path = "/api/reports/filters",
    responses(
        (status = 200, description = "Filter chip labels", body = ApiResponse<FilterChipsDto>)
    ),
    tag = "reports"
)]
pub async fn get_filter_chips() -> Json<ApiResponse<FilterChipsDto>> {
    let chips = FILTER_CHIPS.iter().map(|c| c.to_string()).collect();
    Json(ApiResponse::success(Some(FilterChipsDto { chips }), None, None))
}

/// Download every report as JSON
#[utoipa::path(
    get,
    path = "/api/reports/export",
    responses(
        (status = 200, description = "JSON export attachment", body = ExportDto, content_type = "application/json")
    ),
    tag = "reports"
)]
pub async fn export_reports(State(state): State<ReportState>) -> Result<impl IntoResponse> {
    let reports = state.report_service.list().await;
    let count = reports.len();
    let document = export_document(reports)?;
    tracing::info!("Exported {} reports", count);

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILENAME),
            ),
        ],
        document,
    ))
}

/// Get report detail with badge and timeline
#[utoipa::path(
    get,
    path = "/api/reports/{id}",
    params(
        ("id" = String, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report found", body = ApiResponse<ReportDetailDto>),
        (status = 404, description = "Report not found")
    ),
    tag = "reports"
)]
pub async fn get_report(
    State(state): State<ReportState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ReportDetailDto>>> {
    let report = state.report_service.get_by_id(&id).await?;
    let detail = ReportDetailDto {
        badge: StatusBadgeDto::from(report.status),
        timeline: status_timeline(&report),
        report,
    };
    Ok(Json(ApiResponse::success(Some(detail), None, None)))
}

/// Change a report's status
///
/// Any status may follow any other. An unknown id changes nothing and the
/// envelope carries no data.
#[utoipa::path(
    patch,
    path = "/api/reports/{id}/status",
    params(
        ("id" = String, Path, description = "Report ID")
    ),
    request_body = UpdateReportStatusDto,
    responses(
        (status = 200, description = "Status updated (data is null when the id is unknown)", body = ApiResponse<Report>),
        (status = 400, description = "Unknown status"),
        (status = 500, description = "Failed to persist data")
    ),
    tag = "reports"
)]
pub async fn update_report_status(
    State(state): State<ReportState>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateReportStatusDto>,
) -> Result<Json<ApiResponse<Report>>> {
    let updated = state.report_service.update_status(&id, dto.status).await?;
    let message = match &updated {
        Some(_) => format!("Report status updated to {}", dto.status),
        None => format!("Report {} not found", id),
    };
    Ok(Json(ApiResponse::success(updated, Some(message), None)))
}

/// Share payload for a report
#[utoipa::path(
    get,
    path = "/api/reports/{id}/share",
    params(
        ("id" = String, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Share payload", body = ApiResponse<ShareDto>),
        (status = 404, description = "Report not found")
    ),
    tag = "reports"
)]
pub async fn share_report(
    State(state): State<ReportState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ShareDto>>> {
    let report = state.report_service.get_by_id(&id).await?;
    Ok(Json(ApiResponse::success(
        Some(share_payload(&report, &state.frontend_url)),
        None,
        None,
    )))
}
