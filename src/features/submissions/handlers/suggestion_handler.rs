use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::Result;
use crate::features::submissions::dtos::{SuggestionQueryParams, SuggestionsDto};
use crate::features::submissions::services::SubmissionService;
use crate::shared::types::ApiResponse;

/// Category auto-suggest for the report form
#[utoipa::path(
    get,
    path = "/api/categories/suggestions",
    params(SuggestionQueryParams),
    responses(
        (status = 200, description = "Categories starting with the typed prefix", body = ApiResponse<SuggestionsDto>)
    ),
    tag = "submissions"
)]
pub async fn get_category_suggestions(
    State(service): State<Arc<SubmissionService>>,
    Query(params): Query<SuggestionQueryParams>,
) -> Result<Json<ApiResponse<SuggestionsDto>>> {
    let suggestions = service.suggest_categories(params.q.as_deref().unwrap_or_default());
    Ok(Json(ApiResponse::success(
        Some(SuggestionsDto { suggestions }),
        None,
        None,
    )))
}
