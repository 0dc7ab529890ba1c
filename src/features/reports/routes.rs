use axum::{
    routing::{get, patch},
    Router,
};

use crate::features::reports::handlers::{self, ReportState};

/// Create routes for the reports feature
pub fn routes(state: ReportState) -> Router {
    Router::new()
        .route(
            "/api/reports",
            get(handlers::list_reports).post(handlers::submit_report),
        )
        .route("/api/reports/stats", get(handlers::get_stats))
        .route("/api/reports/filters", get(handlers::get_filter_chips))
        .route("/api/reports/export", get(handlers::export_reports))
        .route("/api/reports/{id}", get(handlers::get_report))
        .route(
            "/api/reports/{id}/status",
            patch(handlers::update_report_status),
        )
        .route("/api/reports/{id}/share", get(handlers::share_report))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::header;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use super::*;
    use crate::core::config::SubmissionConfig;
    use crate::features::reports::models::{Coordinate, Locality};
    use crate::features::reports::services::ReportService;
    use crate::features::submissions::services::{FixedSuggestions, SubmissionService};
    use crate::shared::test_helpers::seeded_store;

    fn server() -> TestServer {
        let report_service = Arc::new(ReportService::new(seeded_store()));
        let config = SubmissionConfig {
            default_coordinate: Coordinate::new(11.0168, 76.9558),
            default_locality: Locality("Coimbatore".to_string(), "641001".to_string()),
            category_suggestions: vec!["Pothole".to_string()],
        };
        let submission_service = Arc::new(SubmissionService::new(
            report_service.clone(),
            Arc::new(FixedSuggestions::new(config.category_suggestions.clone())),
            config,
        ));
        TestServer::new(routes(ReportState {
            report_service,
            submission_service,
            frontend_url: Arc::from("https://civic.example.org"),
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_submit_then_list_newest_first() {
        let server = server();

        let response = server
            .post("/api/reports")
            .json(&json!({
                "photo": "data:image/png;base64,iVBORw0KGgo=",
                "title": "Pothole on 5th",
                "category": "Pothole",
                "pick_lat": 11.02,
                "pick_lng": 76.95
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["data"]["location_source"], "map_pick");
        let id = body["data"]["report"]["id"].as_str().unwrap().to_string();

        let response = server.get("/api/reports").await;
        let body: Value = response.json();
        assert_eq!(body["meta"]["total"], 6);
        assert_eq!(body["data"][0]["id"], id.as_str());
        assert_eq!(body["data"][0]["status"], "Reported");
        assert_eq!(body["data"][0]["type"], "Pothole");
    }

    #[tokio::test]
    async fn test_submit_without_photo_is_rejected() {
        let response = server()
            .post("/api/reports")
            .json(&json!({ "title": "No photo", "category": "Garbage" }))
            .await;
        response.assert_status_bad_request();
        assert_eq!(
            response.json::<Value>()["message"],
            "Please add a photo of the issue"
        );
    }

    #[tokio::test]
    async fn test_filter_by_status_chip() {
        let response = server()
            .get("/api/reports")
            .add_query_param("filter", "In Progress")
            .await;
        let body: Value = response.json();
        assert!(body["data"]
            .as_array()
            .unwrap()
            .iter()
            .all(|r| r["status"] == "In Progress"));
    }

    #[tokio::test]
    async fn test_update_status_emits_notification_text() {
        let server = server();
        let response = server
            .patch("/api/reports/r1/status")
            .json(&json!({ "status": "Resolved" }))
            .await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["data"]["status"], "Resolved");

        let detail: Value = server.get("/api/reports/r1").await.json();
        assert_eq!(detail["data"]["badge"]["class"], "status-resolved");
        assert_eq!(detail["data"]["timeline"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_update_unknown_report_is_silent() {
        let response = server()
            .patch("/api/reports/missing/status")
            .json(&json!({ "status": "Resolved" }))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn test_unknown_status_label_is_bad_request() {
        let response = server()
            .patch("/api/reports/r1/status")
            .json(&json!({ "status": "Closed" }))
            .await;
        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_detail_not_found() {
        server().get("/api/reports/nope").await.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_share_and_export() {
        let server = server();

        let share: Value = server.get("/api/reports/r2/share").await.json();
        assert_eq!(share["data"]["url"], "https://civic.example.org/reports/r2");
        assert_eq!(share["data"]["fallback_message"], "Link copied to clipboard!");

        let response = server.get("/api/reports/export").await;
        response.assert_status_ok();
        assert_eq!(
            response.header(header::CONTENT_DISPOSITION),
            "attachment; filename=\"civic-radar-reports.json\""
        );
        let body: Value = response.json();
        assert_eq!(body["reports"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_stats() {
        let body: Value = server().get("/api/reports/stats").await.json();
        assert_eq!(body["data"]["total"], 5);
    }

    #[tokio::test]
    async fn test_filter_chips_drive_the_list_filter() {
        let server = server();
        let body: Value = server.get("/api/reports/filters").await.json();
        let chips = body["data"]["chips"].as_array().unwrap();
        assert_eq!(chips.len(), 12);
        assert_eq!(chips[0], "All");
        assert_eq!(chips[11], "Reported");

        let all: Value = server
            .get("/api/reports")
            .add_query_param("filter", chips[0].as_str().unwrap())
            .await
            .json();
        assert_eq!(all["meta"]["total"], 5);
    }
}
