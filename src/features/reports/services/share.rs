use crate::core::error::{AppError, Result};
use crate::features::reports::dtos::{ExportDto, ShareDto};
use crate::features::reports::models::Report;

const CLIPBOARD_MESSAGE: &str = "Link copied to clipboard!";

/// Share payload pointing at the report's page in the web app
pub fn share_payload(report: &Report, frontend_url: &str) -> ShareDto {
    let url = format!(
        "{}/reports/{}",
        frontend_url.trim_end_matches('/'),
        urlencoding::encode(&report.id)
    );
    ShareDto {
        title: report.title.clone(),
        text: format!("Check out this civic report: {}", report.title),
        clipboard_fallback: url.clone(),
        url,
        fallback_message: CLIPBOARD_MESSAGE.to_string(),
    }
}

/// Pretty-printed `{"reports": [...]}` document
pub fn export_document(reports: Vec<Report>) -> Result<String> {
    serde_json::to_string_pretty(&ExportDto { reports })
        .map_err(|e| AppError::Internal(format!("Failed to serialize export: {}", e)))
}
