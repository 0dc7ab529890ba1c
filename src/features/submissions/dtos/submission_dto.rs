use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::reports::models::{Coordinate, Report};

/// Report creation form
///
/// Blank fields are reported one at a time, photo first, so the message
/// always points at the first thing to fix.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct SubmitReportDto {
    /// Photo as a `data:image/...;base64,` URI
    pub photo: Option<String>,

    #[validate(length(max = 200, message = "Title must not exceed 200 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 100, message = "Category must not exceed 100 characters"))]
    pub category: Option<String>,

    /// Defaults to the title when blank
    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    pub description: Option<String>,

    /// Latitude tapped on the map in reporting mode
    #[validate(range(min = -90.0, max = 90.0, message = "Picked latitude must be between -90 and 90"))]
    pub pick_lat: Option<f64>,

    /// Longitude tapped on the map in reporting mode
    #[validate(range(min = -180.0, max = 180.0, message = "Picked longitude must be between -180 and 180"))]
    pub pick_lng: Option<f64>,
}

impl SubmitReportDto {
    pub fn pick(&self) -> Option<Coordinate> {
        match (self.pick_lat, self.pick_lng) {
            (Some(lat), Some(lng)) => Some(Coordinate::new(lat, lng)),
            _ => None,
        }
    }
}

/// Where the coordinate of a new report came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LocationSource {
    PhotoMetadata,
    MapPick,
    Default,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SubmitReportResponseDto {
    pub report: Report,
    pub location_source: LocationSource,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct SuggestionQueryParams {
    /// Prefix typed into the category field
    pub q: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SuggestionsDto {
    pub suggestions: Vec<String>,
}
