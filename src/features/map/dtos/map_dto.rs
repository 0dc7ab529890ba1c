use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::reports::models::{Coordinate, ReportStatus};

/// How marker colors are chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MarkerScheme {
    /// Reports map: color by lifecycle status
    #[default]
    Status,
    /// Incidents map: color by category
    Category,
}

/// Visual style of a marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct MarkerStyle {
    #[schema(value_type = String)]
    pub color: &'static str,
    pub pulse: bool,
}

/// Tile source and initial viewport
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TileLayerDto {
    pub url_template: String,
    pub subdomains: Vec<String>,
    pub attribution: String,
    pub center: Coordinate,
    pub zoom: u8,
}

/// Condensed summary shown when a marker is clicked
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MarkerPopupDto {
    pub title: String,
    pub summary: String,
    pub status: ReportStatus,
    pub badge_class: String,
    pub category: String,
    pub image: String,
    /// Target of the "View Details" action
    pub details_path: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MapMarkerDto {
    pub id: String,
    pub position: Coordinate,
    pub style: MarkerStyle,
    pub popup: MarkerPopupDto,
}

/// Transient marker for a not-yet-submitted location pick
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CandidateMarkerDto {
    pub position: Coordinate,
    pub style: MarkerStyle,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LegendEntryDto {
    pub label: String,
    #[schema(value_type = String)]
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MapViewDto {
    pub tiles: TileLayerDto,
    pub scheme: MarkerScheme,
    pub reporting: bool,
    pub markers: Vec<MapMarkerDto>,
    pub candidate: Option<CandidateMarkerDto>,
    /// Bounding box [min_lat, min_lng, max_lat, max_lng] of the rendered markers
    #[schema(value_type = Option<Vec<f64>>)]
    pub bounds: Option<[f64; 4]>,
    pub legend: Vec<LegendEntryDto>,
    pub total_count: usize,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct MapQueryParams {
    /// Marker coloring scheme (default: status)
    #[serde(default)]
    pub scheme: MarkerScheme,
    /// Location-picking mode for report creation
    #[serde(default)]
    pub reporting: bool,
    /// Latitude of the latest map click (reporting mode only)
    pub pick_lat: Option<f64>,
    /// Longitude of the latest map click (reporting mode only)
    pub pick_lng: Option<f64>,
    /// Same filter chips as the report list
    pub filter: Option<String>,
}

impl MapQueryParams {
    pub fn pick(&self) -> Option<Coordinate> {
        match (self.pick_lat, self.pick_lng) {
            (Some(lat), Some(lng)) => Some(Coordinate::new(lat, lng)),
            _ => None,
        }
    }
}
