use std::sync::Arc;

use validator::Validate;

use crate::core::config::SubmissionConfig;
use crate::core::error::{AppError, Result};
use crate::features::reports::models::{Coordinate, NewReport, ReportSource, ReportStatus};
use crate::features::reports::services::ReportService;
use crate::features::submissions::dtos::{LocationSource, SubmitReportDto, SubmitReportResponseDto};
use crate::features::submissions::services::SuggestionSource;
use crate::modules::photo::{decode_image_data_uri, read_gps_position};
use crate::shared::validation::{not_blank, IMAGE_DATA_URI_REGEX};

const MISSING_PHOTO: &str = "Please add a photo of the issue";
const MISSING_TITLE: &str = "Please enter a title";
const MISSING_CATEGORY: &str = "Please enter a category";

/// Turns the report form into a stored report
pub struct SubmissionService {
    report_service: Arc<ReportService>,
    suggestions: Arc<dyn SuggestionSource>,
    config: SubmissionConfig,
}

impl SubmissionService {
    pub fn new(
        report_service: Arc<ReportService>,
        suggestions: Arc<dyn SuggestionSource>,
        config: SubmissionConfig,
    ) -> Self {
        Self {
            report_service,
            suggestions,
            config,
        }
    }

    pub fn suggest_categories(&self, prefix: &str) -> Vec<String> {
        self.suggestions.suggest(prefix)
    }

    /// Validate, resolve the location, then hand the draft to the store
    pub async fn submit(&self, dto: SubmitReportDto) -> Result<SubmitReportResponseDto> {
        let draft = self.prepare(&dto)?;
        let (geo, location_source) = self.resolve_location(&draft.image, dto.pick());

        let report = self
            .report_service
            .add_report(NewReport { geo, ..draft })
            .await?;

        tracing::info!(
            "Report submitted: id={}, location_source={:?}",
            report.id,
            location_source
        );

        Ok(SubmitReportResponseDto {
            report,
            location_source,
        })
    }

    /// First blocking problem wins; nothing is stored when this fails
    fn prepare(&self, dto: &SubmitReportDto) -> Result<NewReport> {
        let photo = dto.photo.as_deref().unwrap_or_default().trim();
        if not_blank(photo).is_err() {
            return Err(AppError::Validation(MISSING_PHOTO.to_string()));
        }
        if !IMAGE_DATA_URI_REGEX.is_match(photo) {
            return Err(AppError::Validation(
                "Photo must be an image data URI".to_string(),
            ));
        }

        let title = dto.title.as_deref().unwrap_or_default().trim();
        if not_blank(title).is_err() {
            return Err(AppError::Validation(MISSING_TITLE.to_string()));
        }

        let category = dto.category.as_deref().unwrap_or_default().trim();
        if not_blank(category).is_err() {
            return Err(AppError::Validation(MISSING_CATEGORY.to_string()));
        }

        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let description = match dto.description.as_deref().map(str::trim) {
            Some(d) if !d.is_empty() => d.to_string(),
            _ => title.to_string(),
        };

        Ok(NewReport {
            title: title.to_string(),
            description,
            category: category.to_string(),
            location: self.config.default_locality.clone(),
            geo: self.config.default_coordinate,
            image: photo.to_string(),
            status: ReportStatus::Reported,
            source: ReportSource::App,
        })
    }

    /// Photo metadata, then the map pick, then the configured default
    fn resolve_location(&self, photo: &str, pick: Option<Coordinate>) -> (Coordinate, LocationSource) {
        let from_photo = decode_image_data_uri(photo)
            .and_then(|bytes| read_gps_position(&bytes))
            .map(|gps| Coordinate::new(gps.lat, gps.lng));

        if let Some(geo) = from_photo {
            return (geo, LocationSource::PhotoMetadata);
        }

        match pick.filter(Coordinate::is_valid) {
            Some(geo) => (geo, LocationSource::MapPick),
            None => {
                tracing::debug!("No photo GPS or map pick; using default report location");
                (self.config.default_coordinate, LocationSource::Default)
            }
        }
    }
}
