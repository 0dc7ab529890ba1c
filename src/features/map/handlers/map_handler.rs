use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};

use crate::core::error::Result;
use crate::features::map::dtos::{MapQueryParams, MapViewDto};
use crate::features::map::services::{MapService, TileService};
use crate::features::reports::services::ReportService;
use crate::shared::types::{ApiResponse, Meta};

/// State for map handlers
#[derive(Clone)]
pub struct MapState {
    pub map_service: Arc<MapService>,
    pub tile_service: Arc<TileService>,
    pub report_service: Arc<ReportService>,
}

/// Map view over the current reports
///
/// Pass `reporting=true` with `pick_lat`/`pick_lng` to render the candidate
/// marker for a location being picked. The candidate is never stored.
#[utoipa::path(
    get,
    path = "/api/map",
    params(MapQueryParams),
    responses(
        (status = 200, description = "Map view", body = ApiResponse<MapViewDto>),
        (status = 400, description = "Invalid query")
    ),
    tag = "map"
)]
pub async fn get_map(
    State(state): State<MapState>,
    Query(params): Query<MapQueryParams>,
) -> Result<Json<ApiResponse<MapViewDto>>> {
    let reports = state.report_service.list().await;
    let view = state.map_service.view(&reports, &params);
    let total = view.total_count;
    Ok(Json(ApiResponse::success(
        Some(view),
        None,
        Some(Meta::total(total)),
    )))
}

/// Tile imagery from the configured tile service
#[utoipa::path(
    get,
    path = "/api/map/tiles/{z}/{x}/{y}",
    params(
        ("z" = u8, Path, description = "Zoom level (0-19)"),
        ("x" = u32, Path, description = "Tile column"),
        ("y" = u32, Path, description = "Tile row")
    ),
    responses(
        (status = 200, description = "Tile image", body = Vec<u8>, content_type = "image/png"),
        (status = 400, description = "Tile outside the grid"),
        (status = 502, description = "Tile service unavailable")
    ),
    tag = "map"
)]
pub async fn get_tile(
    State(state): State<MapState>,
    Path((z, x, y)): Path<(u8, u32, u32)>,
) -> Result<impl IntoResponse> {
    let tile = state.tile_service.fetch(z, x, y).await?;
    Ok((
        [
            (header::CONTENT_TYPE, tile.content_type),
            (header::CACHE_CONTROL, "public, max-age=86400".to_string()),
        ],
        tile.bytes,
    ))
}
