use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::submissions::handlers;
use crate::features::submissions::services::SubmissionService;

/// Create routes for the submissions feature
///
/// Report creation itself is mounted with the other report routes.
pub fn routes(service: Arc<SubmissionService>) -> Router {
    Router::new()
        .route(
            "/api/categories/suggestions",
            get(handlers::get_category_suggestions),
        )
        .with_state(service)
}
