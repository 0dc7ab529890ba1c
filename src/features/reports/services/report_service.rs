use tokio::sync::Mutex;

use crate::core::error::{AppError, Result};
use crate::features::notifications::models::Notification;
use crate::features::reports::models::{NewReport, Report, ReportStatus};
use crate::features::reports::services::browse::{
    filter_reports, status_counts, ReportFilter, StatusCounts,
};
use crate::features::reports::services::report_store::ReportStore;

/// Shared access to the report store
///
/// The lock is held for the whole of each operation, including the durable
/// write, so operations never interleave.
pub struct ReportService {
    store: Mutex<ReportStore>,
}

impl ReportService {
    pub fn new(store: ReportStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// All reports in store order (newest first)
    pub async fn list(&self) -> Vec<Report> {
        self.store.lock().await.reports().to_vec()
    }

    /// Search and filter, newest first
    pub async fn search(&self, query: &str, filter: &ReportFilter) -> Vec<Report> {
        let store = self.store.lock().await;
        filter_reports(store.reports(), query, filter)
            .into_iter()
            .cloned()
            .collect()
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Report> {
        self.store
            .lock()
            .await
            .get_report(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))
    }

    pub async fn stats(&self) -> StatusCounts {
        status_counts(self.store.lock().await.reports())
    }

    pub async fn add_report(&self, draft: NewReport) -> Result<Report> {
        let report = self.store.lock().await.add_report(draft).map_err(|e| {
            tracing::error!("Failed to persist new report: {:?}", e);
            AppError::Storage(e)
        })?;

        tracing::info!(
            "Report created: id={}, category={}, lat={}, lng={}",
            report.id,
            report.category,
            report.geo.lat,
            report.geo.lng
        );

        Ok(report)
    }

    /// `None` when no report has this id; nothing changes in that case
    pub async fn update_status(&self, id: &str, status: ReportStatus) -> Result<Option<Report>> {
        let updated = self
            .store
            .lock()
            .await
            .update_report_status(id, status)
            .map_err(|e| {
                tracing::error!("Failed to persist status update for {}: {:?}", id, e);
                AppError::Storage(e)
            })?;

        if let Some(report) = &updated {
            tracing::info!("Report status updated: id={}, status={}", report.id, status);
        }

        Ok(updated)
    }

    pub async fn notifications(&self) -> (Vec<Notification>, usize) {
        let store = self.store.lock().await;
        (
            store.notifications().to_vec(),
            store.unread_notifications_count(),
        )
    }

    pub async fn unread_notifications_count(&self) -> usize {
        self.store.lock().await.unread_notifications_count()
    }

    /// Unread count after the change, or `None` when no notification has this id
    pub async fn mark_notification_as_read(&self, id: &str) -> Result<Option<usize>> {
        let mut store = self.store.lock().await;
        if !store.mark_notification_as_read(id)? {
            return Ok(None);
        }
        Ok(Some(store.unread_notifications_count()))
    }

    /// Number flipped to read and the unread count left afterwards
    pub async fn mark_all_notifications_as_read(&self) -> Result<(usize, usize)> {
        let mut store = self.store.lock().await;
        let flipped = store.mark_all_notifications_as_read()?;
        tracing::debug!("Marked {} notifications as read", flipped);
        Ok((flipped, store.unread_notifications_count()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{new_report, seeded_store};

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let service = ReportService::new(seeded_store());
        let result = service.get_by_id("nope").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_add_then_search_finds_newest_first() {
        let service = ReportService::new(seeded_store());
        let created = service.add_report(new_report("Pothole on 5th")).await.unwrap();

        let results = service.search("", &ReportFilter::All).await;
        assert_eq!(results[0].id, created.id);

        let (notifications, unread) = service.notifications().await;
        assert_eq!(notifications[0].report_id, created.id);
        assert_eq!(unread, 3);
        assert_eq!(service.stats().await.reported, 3);
    }

    #[tokio::test]
    async fn test_unknown_status_update_returns_none() {
        let service = ReportService::new(seeded_store());
        let updated = service
            .update_status("missing", ReportStatus::InProgress)
            .await
            .unwrap();
        assert!(updated.is_none());
        assert_eq!(service.notifications().await.0.len(), 3);
    }

    #[tokio::test]
    async fn test_mark_read_reports_count_from_same_mutation() {
        let service = ReportService::new(seeded_store());
        assert_eq!(service.mark_notification_as_read("n1").await.unwrap(), Some(1));
        assert_eq!(service.mark_notification_as_read("missing").await.unwrap(), None);

        service.add_report(new_report("Loose manhole")).await.unwrap();
        assert_eq!(service.mark_all_notifications_as_read().await.unwrap(), (2, 0));
        assert_eq!(service.mark_all_notifications_as_read().await.unwrap(), (0, 0));
    }
}
