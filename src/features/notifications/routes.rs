use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::features::notifications::handlers;
use crate::features::reports::services::ReportService;

/// Create routes for the notifications feature
///
/// Notifications live in the report store, so these routes share its service.
pub fn routes(service: Arc<ReportService>) -> Router {
    Router::new()
        .route("/api/notifications", get(handlers::list_notifications))
        .route(
            "/api/notifications/unread-count",
            get(handlers::get_unread_count),
        )
        .route(
            "/api/notifications/{id}/read",
            patch(handlers::mark_notification_as_read),
        )
        .route(
            "/api/notifications/read-all",
            post(handlers::mark_all_notifications_as_read),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use serde_json::Value;

    use super::*;
    use crate::shared::test_helpers::seeded_store;

    fn server() -> TestServer {
        TestServer::new(routes(Arc::new(ReportService::new(seeded_store())))).unwrap()
    }

    #[tokio::test]
    async fn test_list_includes_unread_count() {
        let response = server().get("/api/notifications").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"]["notifications"].as_array().unwrap().len(), 3);
        assert_eq!(body["data"]["unread_count"], 2);
        assert_eq!(body["data"]["notifications"][0]["reportId"], "r1");
    }

    #[tokio::test]
    async fn test_mark_one_then_all() {
        let server = server();

        let response = server.patch("/api/notifications/n1/read").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["data"]["unread_count"], 1);

        let response = server.post("/api/notifications/read-all").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["marked"], 1);
        assert_eq!(body["data"]["unread_count"], 0);

        // idempotent
        let response = server.post("/api/notifications/read-all").await;
        assert_eq!(response.json::<Value>()["data"]["marked"], 0);

        let response = server.get("/api/notifications/unread-count").await;
        assert_eq!(response.json::<Value>()["data"]["unread_count"], 0);
    }

    #[tokio::test]
    async fn test_unknown_notification_is_not_an_error() {
        let response = server().patch("/api/notifications/n404/read").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert!(body["data"].is_null());
    }
}
