//! Read-only projections over the report collection: search, filter chips,
//! status counts and the detail-view timeline.

use chrono::{DateTime, Duration, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::reports::models::{Report, ReportStatus};

/// Filter chips offered by the recent-reports view, in display order
pub const FILTER_CHIPS: [&str; 12] = [
    "All",
    "Pothole",
    "Streetlight",
    "Garbage",
    "Tree Fall",
    "Water Leak",
    "Traffic",
    "Infrastructure",
    "Safety",
    "Resolved",
    "In Progress",
    "Reported",
];

/// Active category/status filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportFilter {
    All,
    Status(ReportStatus),
    /// Case-insensitive substring of the category
    Category(String),
}

impl ReportFilter {
    /// Status labels select by status; anything else filters by category
    pub fn parse(label: Option<&str>) -> Self {
        match label.map(str::trim) {
            None | Some("") => ReportFilter::All,
            Some(l) if l.eq_ignore_ascii_case("all") => ReportFilter::All,
            Some(l) => match ReportStatus::from_label(l) {
                Some(status) => ReportFilter::Status(status),
                None => ReportFilter::Category(l.to_lowercase()),
            },
        }
    }

    fn matches(&self, report: &Report) -> bool {
        match self {
            ReportFilter::All => true,
            ReportFilter::Status(status) => report.status == *status,
            ReportFilter::Category(needle) => report.category.to_lowercase().contains(needle),
        }
    }
}

fn matches_query(report: &Report, query: &str) -> bool {
    [
        report.title.as_str(),
        report.description.as_str(),
        report.category.as_str(),
        report.location.city(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(query))
}

/// Search and filter, newest `reported_at` first
pub fn filter_reports<'a>(reports: &'a [Report], query: &str, filter: &ReportFilter) -> Vec<&'a Report> {
    let query = query.trim().to_lowercase();
    let mut matched: Vec<&Report> = reports
        .iter()
        .filter(|r| query.is_empty() || matches_query(r, &query))
        .filter(|r| filter.matches(r))
        .collect();
    matched.sort_by(|a, b| b.reported_at.cmp(&a.reported_at));
    matched
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusCounts {
    pub reported: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub total: usize,
}

pub fn status_counts(reports: &[Report]) -> StatusCounts {
    reports.iter().fold(StatusCounts::default(), |mut acc, r| {
        match r.status {
            ReportStatus::Reported => acc.reported += 1,
            ReportStatus::InProgress => acc.in_progress += 1,
            ReportStatus::Resolved => acc.resolved += 1,
        }
        acc.total += 1;
        acc
    })
}

/// One reached step in a report's progress timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TimelineStep {
    pub status: ReportStatus,
    pub at: DateTime<FixedOffset>,
    pub description: String,
}

/// Steps reached so far; later steps are placed at nominal offsets from creation
pub fn status_timeline(report: &Report) -> Vec<TimelineStep> {
    let base = report.reported_at;
    let mut steps = vec![TimelineStep {
        status: ReportStatus::Reported,
        at: base,
        description: "Report received and logged".to_string(),
    }];

    if matches!(report.status, ReportStatus::InProgress | ReportStatus::Resolved) {
        steps.push(TimelineStep {
            status: ReportStatus::InProgress,
            at: base + Duration::days(1),
            description: "Work assigned and in progress".to_string(),
        });
    }

    if report.status == ReportStatus::Resolved {
        steps.push(TimelineStep {
            status: ReportStatus::Resolved,
            at: base + Duration::days(3),
            description: "Issue successfully resolved".to_string(),
        });
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::models::seed_reports;

    fn ids(reports: &[&Report]) -> Vec<String> {
        reports.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(ReportFilter::parse(None), ReportFilter::All);
        assert_eq!(ReportFilter::parse(Some("All")), ReportFilter::All);
        assert_eq!(
            ReportFilter::parse(Some("In Progress")),
            ReportFilter::Status(ReportStatus::InProgress)
        );
        assert_eq!(
            ReportFilter::parse(Some("Tree Fall")),
            ReportFilter::Category("tree fall".to_string())
        );
    }

    #[test]
    fn test_query_matches_title_description_category_and_city() {
        let reports = seed_reports();
        let all = ReportFilter::All;

        assert_eq!(ids(&filter_reports(&reports, "POTHOLE", &all)), vec!["r3"]);
        assert_eq!(ids(&filter_reports(&reports, "stray animals", &all)), vec!["r4"]);
        assert_eq!(filter_reports(&reports, "coimbatore", &all).len(), 5);
        assert!(filter_reports(&reports, "volcano", &all).is_empty());
    }

    #[test]
    fn test_status_and_category_filters() {
        let reports = seed_reports();

        let in_progress = filter_reports(&reports, "", &ReportFilter::parse(Some("In Progress")));
        assert_eq!(ids(&in_progress), vec!["r2", "r5"]);

        let leaks = filter_reports(&reports, " ", &ReportFilter::parse(Some("water")));
        assert_eq!(ids(&leaks), vec!["r5"]);
    }

    #[test]
    fn test_results_are_newest_first_regardless_of_store_order() {
        let mut reports = seed_reports();
        reports.reverse();
        let sorted = filter_reports(&reports, "", &ReportFilter::All);
        assert_eq!(ids(&sorted), vec!["r1", "r2", "r3", "r4", "r5"]);
    }

    #[test]
    fn test_status_counts() {
        let counts = status_counts(&seed_reports());
        assert_eq!(
            counts,
            StatusCounts {
                reported: 2,
                in_progress: 2,
                resolved: 1,
                total: 5
            }
        );
    }

    #[test]
    fn test_timeline_grows_with_status() {
        let reports = seed_reports();
        let reported = &reports[0];
        let resolved = &reports[2];

        assert_eq!(status_timeline(reported).len(), 1);

        let steps = status_timeline(resolved);
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[2].status, ReportStatus::Resolved);
        assert_eq!(steps[2].at - steps[0].at, Duration::days(3));
    }
}
