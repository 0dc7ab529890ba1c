use crate::core::config::MapConfig;
use crate::features::map::dtos::{MapQueryParams, MapViewDto, TileLayerDto};
use crate::features::map::services::LocationPicker;
use crate::features::map::services::markers::{bounds, build_markers, legend};
use crate::features::reports::models::Report;
use crate::features::reports::services::browse::{filter_reports, ReportFilter};

/// Builds map view-models from the current report collection
pub struct MapService {
    config: MapConfig,
}

impl MapService {
    pub fn new(config: MapConfig) -> Self {
        Self { config }
    }

    pub fn tile_layer(&self) -> TileLayerDto {
        TileLayerDto {
            url_template: self.config.tile_url.clone(),
            subdomains: self.config.tile_subdomains.clone(),
            attribution: self.config.attribution.clone(),
            center: self.config.default_center,
            zoom: self.config.default_zoom,
        }
    }

    /// Render one map view
    ///
    /// Markers follow the same filter chips as the report list. In reporting
    /// mode the latest pick becomes the candidate marker.
    pub fn view(&self, reports: &[Report], params: &MapQueryParams) -> MapViewDto {
        let filter = ReportFilter::parse(params.filter.as_deref());
        let visible = filter_reports(reports, "", &filter);
        let markers = build_markers(visible.iter().copied(), params.scheme);

        let mut picker = LocationPicker::new(params.reporting);
        if let Some(at) = params.pick() {
            picker.click(at);
        }

        tracing::debug!(
            "Map view: scheme={:?}, markers={}, reporting={}",
            params.scheme,
            markers.len(),
            params.reporting
        );

        MapViewDto {
            tiles: self.tile_layer(),
            scheme: params.scheme,
            reporting: picker.is_reporting(),
            bounds: bounds(&markers),
            legend: legend(params.scheme),
            total_count: markers.len(),
            markers,
            candidate: picker.candidate_marker(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::map::dtos::MarkerScheme;
    use crate::features::reports::models::{seed_reports, Coordinate};
    use crate::shared::test_helpers::map_config;

    #[test]
    fn test_view_renders_every_seed_report() {
        let service = MapService::new(map_config());
        let view = service.view(&seed_reports(), &MapQueryParams::default());

        assert_eq!(view.total_count, 5);
        assert_eq!(view.scheme, MarkerScheme::Status);
        assert!(view.candidate.is_none());
        assert_eq!(view.legend.len(), 3);
        assert_eq!(view.tiles.zoom, 13);
    }

    #[test]
    fn test_view_applies_filter_chip() {
        let service = MapService::new(map_config());
        let params = MapQueryParams {
            filter: Some("Resolved".to_string()),
            ..Default::default()
        };
        let view = service.view(&seed_reports(), &params);
        assert!(view
            .markers
            .iter()
            .all(|m| m.popup.status.label() == "Resolved"));
    }

    #[test]
    fn test_pick_only_counts_in_reporting_mode() {
        let service = MapService::new(map_config());
        let mut params = MapQueryParams {
            pick_lat: Some(11.02),
            pick_lng: Some(76.97),
            ..Default::default()
        };

        let view = service.view(&seed_reports(), &params);
        assert!(view.candidate.is_none());

        params.reporting = true;
        let view = service.view(&seed_reports(), &params);
        let candidate = view.candidate.expect("candidate marker");
        assert_eq!(candidate.position, Coordinate::new(11.02, 76.97));
        // candidate is never counted as a report
        assert_eq!(view.total_count, 5);
    }
}
