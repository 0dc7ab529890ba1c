use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle status of a report
///
/// Ordered Reported -> In Progress -> Resolved for display purposes only;
/// any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ReportStatus {
    Reported,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 3] = [
        ReportStatus::Reported,
        ReportStatus::InProgress,
        ReportStatus::Resolved,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Reported => "Reported",
            ReportStatus::InProgress => "In Progress",
            ReportStatus::Resolved => "Resolved",
        }
    }

    /// Parse a display label, case-insensitively
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(label))
    }

    /// Message used for the notification emitted when a report enters this status
    pub fn notification_message(&self) -> &'static str {
        match self {
            ReportStatus::Reported => "Your report has been received and is under review.",
            ReportStatus::InProgress => {
                "Work has begun on your report and is currently in progress."
            }
            ReportStatus::Resolved => {
                "Great news! Your report has been successfully resolved. Thank you for helping improve our city."
            }
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            ReportStatus::Reported => "status-reported",
            ReportStatus::InProgress => "status-in-progress",
            ReportStatus::Resolved => "status-resolved",
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a report came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportSource {
    App,
    Social,
}

/// WGS84 point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Finite and inside the latitude/longitude ranges
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Display locality as a (city, postal code) pair, stored as a two-element array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locality(pub String, pub String);

impl Locality {
    pub fn city(&self) -> &str {
        &self.0
    }
}

/// A citizen-submitted civic issue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Free-form category tag
    #[serde(rename = "type")]
    pub category: String,
    #[schema(value_type = Vec<String>)]
    pub location: Locality,
    pub geo: Coordinate,
    /// Data URI or image URL
    pub image: String,
    pub status: ReportStatus,
    pub source: ReportSource,
    pub reported_at: DateTime<FixedOffset>,
}

/// Report content before the store assigns an id and timestamp
#[derive(Debug, Clone, PartialEq)]
pub struct NewReport {
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: Locality,
    pub geo: Coordinate,
    pub image: String,
    pub status: ReportStatus,
    pub source: ReportSource,
}

impl NewReport {
    pub fn into_report(self, id: String, reported_at: DateTime<FixedOffset>) -> Report {
        Report {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            location: self.location,
            geo: self.geo,
            image: self.image,
            status: self.status,
            source: self.source,
            reported_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels_round_trip_through_serde() {
        let json = serde_json::to_string(&ReportStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
        let back: ReportStatus = serde_json::from_str("\"Resolved\"").unwrap();
        assert_eq!(back, ReportStatus::Resolved);
        assert!(serde_json::from_str::<ReportStatus>("\"Closed\"").is_err());
    }

    #[test]
    fn test_status_from_label() {
        assert_eq!(
            ReportStatus::from_label("in progress"),
            Some(ReportStatus::InProgress)
        );
        assert_eq!(ReportStatus::from_label("Pothole"), None);
    }

    #[test]
    fn test_report_durable_field_names() {
        let json = r#"{
            "id": "r1",
            "title": "Tree Fall",
            "description": "Blocked road",
            "type": "Tree Fall",
            "location": ["Coimbatore", "641001"],
            "geo": { "lat": 11.0156, "lng": 76.9558 },
            "image": "/placeholder.svg",
            "status": "Reported",
            "source": "app",
            "reportedAt": "2025-09-11T10:00:00+05:30"
        }"#;
        let report: Report = serde_json::from_str(json).unwrap();
        assert_eq!(report.category, "Tree Fall");
        assert_eq!(report.location.city(), "Coimbatore");
        assert_eq!(report.location.1, "641001");
        assert_eq!(report.source, ReportSource::App);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["type"], "Tree Fall");
        assert_eq!(value["reportedAt"], "2025-09-11T10:00:00+05:30");
        assert_eq!(value["location"][1], "641001");
    }

    #[test]
    fn test_coordinate_validity() {
        assert!(Coordinate::new(11.02, 76.95).is_valid());
        assert!(!Coordinate::new(91.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, -180.5).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
    }
}
