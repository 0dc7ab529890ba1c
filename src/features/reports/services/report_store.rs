//! Canonical report and notification collections with durable persistence
//!
//! The store is a plain synchronous state container: every operation runs to
//! completion and writes each collection it changed in full before returning.
//! Callers that share it across tasks wrap it in a lock (see `ReportService`).

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::config::SeedPolicy;
use crate::features::notifications::models::Notification;
use crate::features::reports::models::{
    seed_notifications, seed_reports, NewReport, Report, ReportStatus,
};
use crate::modules::storage::{KeyValueStorage, StorageError};
use crate::shared::constants::{
    CURRENT_DATA_VERSION, DATA_VERSION_KEY, NOTIFICATIONS_KEY, REPORTS_KEY,
};

/// How the in-memory collections were populated by `initialize`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOrigin {
    /// Version marker absent or different; durable state discarded
    Seeded,
    /// Version matched but the stored reports were replaced by the seed set
    Restored,
    /// Stored reports used as-is
    Loaded,
}

/// Time-based identifiers that stay strictly increasing within a process
#[derive(Debug, Default)]
struct IdGenerator {
    last_millis: i64,
}

impl IdGenerator {
    fn observe(&mut self, id: &str) {
        if let Some(millis) = id.get(1..).and_then(|n| n.parse::<i64>().ok()) {
            self.last_millis = self.last_millis.max(millis);
        }
    }

    fn next(&mut self, now: DateTime<Utc>) -> i64 {
        let millis = now.timestamp_millis().max(self.last_millis + 1);
        self.last_millis = millis;
        millis
    }
}

pub struct ReportStore {
    storage: Arc<dyn KeyValueStorage>,
    reports: Vec<Report>,
    notifications: Vec<Notification>,
    ids: IdGenerator,
    origin: StoreOrigin,
}

impl ReportStore {
    /// Load durable state, or reseed it when the version marker does not match
    pub fn initialize(
        storage: Arc<dyn KeyValueStorage>,
        policy: SeedPolicy,
    ) -> Result<Self, StorageError> {
        let stored_version = storage.get(DATA_VERSION_KEY)?;

        let (reports, notifications, origin) =
            if stored_version.as_deref() != Some(CURRENT_DATA_VERSION) {
                info!(
                    "Data version {:?} does not match {}, resetting to seed data",
                    stored_version, CURRENT_DATA_VERSION
                );
                storage.remove(REPORTS_KEY)?;
                storage.remove(NOTIFICATIONS_KEY)?;
                storage.set(DATA_VERSION_KEY, CURRENT_DATA_VERSION)?;
                (seed_reports(), seed_notifications(), StoreOrigin::Seeded)
            } else {
                let seed = seed_reports();
                let (reports, origin) = match load_collection::<Report>(&*storage, REPORTS_KEY)? {
                    Some(stored)
                        if policy == SeedPolicy::RestoreIfSmaller && stored.len() < seed.len() =>
                    {
                        info!(
                            "Stored reports ({}) fewer than seed set ({}), restoring seed data",
                            stored.len(),
                            seed.len()
                        );
                        (seed, StoreOrigin::Restored)
                    }
                    Some(stored) => (stored, StoreOrigin::Loaded),
                    None => (seed, StoreOrigin::Restored),
                };
                let notifications = load_collection::<Notification>(&*storage, NOTIFICATIONS_KEY)?
                    .unwrap_or_else(seed_notifications);
                (reports, notifications, origin)
            };

        let mut ids = IdGenerator::default();
        reports.iter().for_each(|r| ids.observe(&r.id));
        notifications.iter().for_each(|n| ids.observe(&n.id));

        let store = Self {
            storage,
            reports,
            notifications,
            ids,
            origin,
        };
        store.persist_reports()?;
        store.persist_notifications()?;

        debug!(
            "Loaded {} reports and {} notifications",
            store.reports.len(),
            store.notifications.len()
        );

        Ok(store)
    }

    pub fn origin(&self) -> StoreOrigin {
        self.origin
    }

    /// Reports, newest first
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Notifications, newest first
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn get_report(&self, id: &str) -> Option<&Report> {
        self.reports.iter().find(|r| r.id == id)
    }

    /// Assign an id and timestamp, prepend the report and emit its receipt notification
    pub fn add_report(&mut self, draft: NewReport) -> Result<Report, StorageError> {
        let now = Utc::now();
        let millis = self.ids.next(now);
        let timestamp = now.fixed_offset();

        let report = draft.into_report(format!("r{}", millis), timestamp);
        self.reports.insert(0, report.clone());
        if let Err(e) = self.persist_reports() {
            self.reports.remove(0);
            return Err(e);
        }

        let text = format!(
            "Your report '{}' has been received and assigned tracking number {}.",
            report.title,
            tracking_code(millis)
        );
        if let Err(e) = self.push_notification(format!("n{}", millis), text, timestamp, &report.id) {
            self.reports.remove(0);
            self.restore_reports();
            return Err(e);
        }

        Ok(report)
    }

    /// Replace a report's status and emit the matching notification
    ///
    /// Returns `None` without touching either collection when the id is unknown.
    pub fn update_report_status(
        &mut self,
        id: &str,
        status: ReportStatus,
    ) -> Result<Option<Report>, StorageError> {
        let Some(index) = self.reports.iter().position(|r| r.id == id) else {
            debug!("Status update for unknown report {} ignored", id);
            return Ok(None);
        };

        let previous = self.reports[index].status;
        self.reports[index].status = status;
        if let Err(e) = self.persist_reports() {
            self.reports[index].status = previous;
            return Err(e);
        }

        let report = self.reports[index].clone();
        let now = Utc::now();
        let millis = self.ids.next(now);
        let text = format!("{} Report: '{}'", status.notification_message(), report.title);
        if let Err(e) = self.push_notification(format!("n{}", millis), text, now.fixed_offset(), &report.id) {
            self.reports[index].status = previous;
            self.restore_reports();
            return Err(e);
        }

        Ok(Some(report))
    }

    /// Returns `false` when no notification has this id
    pub fn mark_notification_as_read(&mut self, id: &str) -> Result<bool, StorageError> {
        let Some(index) = self.notifications.iter().position(|n| n.id == id) else {
            return Ok(false);
        };
        if self.notifications[index].read {
            return Ok(true);
        }

        self.notifications[index].read = true;
        if let Err(e) = self.persist_notifications() {
            self.notifications[index].read = false;
            return Err(e);
        }
        Ok(true)
    }

    /// Returns how many notifications changed from unread to read
    pub fn mark_all_notifications_as_read(&mut self) -> Result<usize, StorageError> {
        let flipped: Vec<usize> = self
            .notifications
            .iter()
            .enumerate()
            .filter(|(_, n)| !n.read)
            .map(|(i, _)| i)
            .collect();
        if flipped.is_empty() {
            return Ok(0);
        }

        flipped.iter().for_each(|&i| self.notifications[i].read = true);
        if let Err(e) = self.persist_notifications() {
            flipped.iter().for_each(|&i| self.notifications[i].read = false);
            return Err(e);
        }
        Ok(flipped.len())
    }

    /// Recomputed from the collection on every call
    pub fn unread_notifications_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    fn push_notification(
        &mut self,
        id: String,
        text: String,
        time: DateTime<FixedOffset>,
        report_id: &str,
    ) -> Result<(), StorageError> {
        self.notifications.insert(
            0,
            Notification {
                id,
                text,
                time,
                report_id: report_id.to_string(),
                read: false,
            },
        );
        if let Err(e) = self.persist_notifications() {
            self.notifications.remove(0);
            return Err(e);
        }
        Ok(())
    }

    /// Rewrite reports after an in-memory rollback; the original error wins
    fn restore_reports(&self) {
        if let Err(e) = self.persist_reports() {
            warn!("Failed to restore reports after rollback: {}", e);
        }
    }

    fn persist_reports(&self) -> Result<(), StorageError> {
        save_collection(&*self.storage, REPORTS_KEY, &self.reports)
    }

    fn persist_notifications(&self) -> Result<(), StorageError> {
        save_collection(&*self.storage, NOTIFICATIONS_KEY, &self.notifications)
    }
}

/// Human-readable tracking code derived from the creation time
fn tracking_code(millis: i64) -> String {
    format!("#CR{:03}", millis.rem_euclid(1000))
}

/// Unparsable stored JSON counts as absent
fn load_collection<T: DeserializeOwned>(
    storage: &dyn KeyValueStorage,
    key: &str,
) -> Result<Option<Vec<T>>, StorageError> {
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(items) => Ok(Some(items)),
        Err(e) => {
            warn!("Discarding unreadable collection '{}': {}", key, e);
            Ok(None)
        }
    }
}

fn save_collection<T: Serialize>(
    storage: &dyn KeyValueStorage,
    key: &str,
    items: &[T],
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(items)?;
    storage.set(key, &raw)
}
