mod report;
mod seed;

pub use report::{Coordinate, Locality, NewReport, Report, ReportSource, ReportStatus};
pub use seed::{seed_notifications, seed_reports};
