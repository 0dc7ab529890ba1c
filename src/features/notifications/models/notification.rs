use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Short message describing a report lifecycle event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub text: String,
    pub time: DateTime<FixedOffset>,
    /// Originating report; the report is not guaranteed to still exist
    pub report_id: String,
    #[serde(default)]
    pub read: bool,
}
