pub mod map;
pub mod notifications;
pub mod reports;
pub mod submissions;
