//! Built-in dataset used on first run and after a version-marker mismatch

use chrono::{DateTime, FixedOffset};

use super::report::{Coordinate, Locality, Report, ReportSource, ReportStatus};
use crate::features::notifications::models::Notification;

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

struct SeedReport {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: &'static str,
    postal_code: &'static str,
    lat: f64,
    lng: f64,
    status: ReportStatus,
    source: ReportSource,
    reported_at: &'static str,
}

const SEED_REPORTS: [SeedReport; 5] = [
    SeedReport {
        id: "r1",
        title: "Tree Fall Blocks Road in RS Puram",
        description: "Large tree blocking main road after storm, causing severe traffic disruption. Emergency vehicles unable to pass through the area.",
        category: "Tree Fall",
        postal_code: "641001",
        lat: 11.0156,
        lng: 76.9558,
        status: ReportStatus::Reported,
        source: ReportSource::App,
        reported_at: "2025-09-11T10:00:00+05:30",
    },
    SeedReport {
        id: "r2",
        title: "Streetlight Not Working Near Market",
        description: "No lights at night along the market street, making it unsafe for pedestrians and causing security concerns for local businesses.",
        category: "Streetlight",
        postal_code: "641002",
        lat: 11.0182,
        lng: 76.9530,
        status: ReportStatus::InProgress,
        source: ReportSource::Social,
        reported_at: "2025-09-10T08:30:00+05:30",
    },
    SeedReport {
        id: "r3",
        title: "Large Pothole on Main Road",
        description: "Deep pothole causing vehicle damage and traffic slowdowns. Multiple complaints from commuters about the dangerous road condition.",
        category: "Pothole",
        postal_code: "641003",
        lat: 11.0124,
        lng: 76.9600,
        status: ReportStatus::Resolved,
        source: ReportSource::App,
        reported_at: "2025-09-09T14:15:00+05:30",
    },
    SeedReport {
        id: "r4",
        title: "Overflowing Garbage Bin",
        description: "Waste bin overflowing for several days, creating unsanitary conditions and attracting stray animals in the residential area.",
        category: "Garbage",
        postal_code: "641004",
        lat: 11.0098,
        lng: 76.9521,
        status: ReportStatus::Reported,
        source: ReportSource::App,
        reported_at: "2025-09-08T16:45:00+05:30",
    },
    SeedReport {
        id: "r5",
        title: "Water Pipe Leak on Sidewalk",
        description: "Continuous water leak creating puddles and making the sidewalk slippery. Residents concerned about water wastage and safety.",
        category: "Water Leak",
        postal_code: "641005",
        lat: 11.0203,
        lng: 76.9485,
        status: ReportStatus::InProgress,
        source: ReportSource::Social,
        reported_at: "2025-09-07T09:20:00+05:30",
    },
];

const SEED_NOTIFICATIONS: [(&str, &str, &str, &str, bool); 3] = [
    (
        "n1",
        "Your report 'Tree Fall Blocks Road' has been received and assigned tracking number #CR001.",
        "2025-09-11T10:01:00+05:30",
        "r1",
        false,
    ),
    (
        "n2",
        "Report 'Streetlight Not Working' has been assigned to maintenance crew and work will begin tomorrow.",
        "2025-09-10T09:00:00+05:30",
        "r2",
        false,
    ),
    (
        "n3",
        "Great news! The pothole on Main Road has been successfully repaired. Thank you for reporting.",
        "2025-09-09T17:30:00+05:30",
        "r3",
        true,
    ),
];

fn parse_time(raw: &str) -> DateTime<FixedOffset> {
    // Seed timestamps are literals covered by tests
    DateTime::parse_from_rfc3339(raw).unwrap_or_default()
}

/// Built-in reports, newest first
pub fn seed_reports() -> Vec<Report> {
    SEED_REPORTS
        .iter()
        .map(|s| Report {
            id: s.id.to_string(),
            title: s.title.to_string(),
            description: s.description.to_string(),
            category: s.category.to_string(),
            location: Locality("Coimbatore".to_string(), s.postal_code.to_string()),
            geo: Coordinate::new(s.lat, s.lng),
            image: PLACEHOLDER_IMAGE.to_string(),
            status: s.status,
            source: s.source,
            reported_at: parse_time(s.reported_at),
        })
        .collect()
}

/// Built-in notifications, newest first
pub fn seed_notifications() -> Vec<Notification> {
    SEED_NOTIFICATIONS
        .iter()
        .map(|(id, text, time, report_id, read)| Notification {
            id: id.to_string(),
            text: text.to_string(),
            time: parse_time(time),
            report_id: report_id.to_string(),
            read: *read,
        })
        .collect()
}
