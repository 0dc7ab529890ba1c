mod submission_service;
mod suggestion_service;

pub use submission_service::SubmissionService;
pub use suggestion_service::{FixedSuggestions, SuggestionSource};
