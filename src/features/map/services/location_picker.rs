use crate::features::map::dtos::CandidateMarkerDto;
use crate::features::map::services::markers::CANDIDATE_STYLE;
use crate::features::reports::models::Coordinate;

const CANDIDATE_LABEL: &str = "New Report Location";

/// View-local "pick a location" state for report creation
///
/// Holds at most one candidate marker. Nothing here is ever written to the
/// report collection; the picked coordinate only reaches the store through a
/// successful submission.
#[derive(Debug, Clone, Default)]
pub struct LocationPicker {
    reporting: bool,
    candidate: Option<Coordinate>,
}

impl LocationPicker {
    pub fn new(reporting: bool) -> Self {
        Self {
            reporting,
            candidate: None,
        }
    }

    pub fn is_reporting(&self) -> bool {
        self.reporting
    }

    /// Handle a click on the map surface
    ///
    /// Outside reporting mode clicks are ignored. Otherwise the coordinate is
    /// handed back to the caller and replaces any previous candidate.
    pub fn click(&mut self, at: Coordinate) -> Option<Coordinate> {
        if !self.reporting || !at.is_valid() {
            return None;
        }
        self.candidate = Some(at);
        Some(at)
    }

    pub fn candidate_marker(&self) -> Option<CandidateMarkerDto> {
        self.candidate.map(|position| CandidateMarkerDto {
            position,
            style: CANDIDATE_STYLE,
            label: CANDIDATE_LABEL.to_string(),
        })
    }
}
