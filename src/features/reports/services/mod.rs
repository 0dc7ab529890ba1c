pub mod browse;
mod report_service;
mod report_store;
pub mod share;

pub use browse::{ReportFilter, StatusCounts, TimelineStep, FILTER_CHIPS};
pub use report_service::ReportService;
pub use report_store::ReportStore;
