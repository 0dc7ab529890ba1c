//! Marker palettes and the report -> marker projection

use crate::features::map::dtos::{
    LegendEntryDto, MapMarkerDto, MarkerPopupDto, MarkerScheme, MarkerStyle,
};
use crate::features::reports::models::{Report, ReportStatus};

/// Used for any category outside the palette
pub const FALLBACK_COLOR: &str = "#6b7280";

/// Candidate (not yet submitted) location
pub const CANDIDATE_STYLE: MarkerStyle = MarkerStyle {
    color: "#10b981",
    pulse: true,
};

const POPUP_SUMMARY_CHARS: usize = 80;

const STATUS_PALETTE: [(ReportStatus, &str); 3] = [
    (ReportStatus::Reported, "#F59E0B"),
    (ReportStatus::InProgress, "#0FBF9B"),
    (ReportStatus::Resolved, "#16A34A"),
];

const CATEGORY_PALETTE: [(&str, &str); 4] = [
    ("traffic", "#ef4444"),
    ("weather", "#3b82f6"),
    ("infrastructure", "#f97316"),
    ("safety", "#eab308"),
];

/// Reported markers pulse until someone picks the report up
pub fn status_style(status: ReportStatus) -> MarkerStyle {
    let color = STATUS_PALETTE
        .iter()
        .find(|(s, _)| *s == status)
        .map(|(_, c)| *c)
        .unwrap_or(FALLBACK_COLOR);
    MarkerStyle {
        color,
        pulse: status == ReportStatus::Reported,
    }
}

pub fn category_style(category: &str) -> MarkerStyle {
    let key = category.trim().to_lowercase();
    let color = CATEGORY_PALETTE
        .iter()
        .find(|(c, _)| *c == key)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_COLOR);
    MarkerStyle {
        color,
        pulse: false,
    }
}

pub fn marker_style(scheme: MarkerScheme, report: &Report) -> MarkerStyle {
    match scheme {
        MarkerScheme::Status => status_style(report.status),
        MarkerScheme::Category => category_style(&report.category),
    }
}

/// First 80 characters, with an ellipsis when cut
pub fn popup_summary(description: &str) -> String {
    let mut chars = description.chars();
    let head: String = chars.by_ref().take(POPUP_SUMMARY_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head.trim_end())
    } else {
        head
    }
}

pub fn popup(report: &Report) -> MarkerPopupDto {
    MarkerPopupDto {
        title: report.title.clone(),
        summary: popup_summary(&report.description),
        status: report.status,
        badge_class: report.status.badge_class().to_string(),
        category: report.category.clone(),
        image: report.image.clone(),
        details_path: format!("/reports/{}", report.id),
    }
}

/// One marker per report with a valid coordinate; the rest are skipped
pub fn build_markers<'a, I>(reports: I, scheme: MarkerScheme) -> Vec<MapMarkerDto>
where
    I: IntoIterator<Item = &'a Report>,
{
    reports
        .into_iter()
        .filter_map(|report| {
            if !report.geo.is_valid() {
                tracing::debug!(
                    "Skipping marker for report {}: invalid coordinate ({}, {})",
                    report.id,
                    report.geo.lat,
                    report.geo.lng
                );
                return None;
            }
            Some(MapMarkerDto {
                id: report.id.clone(),
                position: report.geo,
                style: marker_style(scheme, report),
                popup: popup(report),
            })
        })
        .collect()
}

/// [min_lat, min_lng, max_lat, max_lng], or `None` without markers
pub fn bounds(markers: &[MapMarkerDto]) -> Option<[f64; 4]> {
    if markers.is_empty() {
        return None;
    }
    let init = [f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY];
    Some(markers.iter().fold(init, |[min_lat, min_lng, max_lat, max_lng], m| {
        [
            min_lat.min(m.position.lat),
            min_lng.min(m.position.lng),
            max_lat.max(m.position.lat),
            max_lng.max(m.position.lng),
        ]
    }))
}

pub fn legend(scheme: MarkerScheme) -> Vec<LegendEntryDto> {
    match scheme {
        MarkerScheme::Status => STATUS_PALETTE
            .iter()
            .map(|&(status, color)| LegendEntryDto {
                label: status.label().to_string(),
                color,
            })
            .collect(),
        MarkerScheme::Category => CATEGORY_PALETTE
            .iter()
            .map(|&(category, color)| LegendEntryDto {
                label: category.to_string(),
                color,
            })
            .chain(std::iter::once(LegendEntryDto {
                label: "other".to_string(),
                color: FALLBACK_COLOR,
            }))
            .collect(),
    }
}
