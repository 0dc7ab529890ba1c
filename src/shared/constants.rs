// =============================================================================
// DURABLE STORAGE KEYS
// =============================================================================

/// Serialized report collection
pub const REPORTS_KEY: &str = "civic-radar-reports";

/// Serialized notification collection
pub const NOTIFICATIONS_KEY: &str = "civic-radar-notifications";

/// Schema/version marker for the two collections above
pub const DATA_VERSION_KEY: &str = "civic-radar-data-version";

/// Bump to force every client back to the seed dataset
pub const CURRENT_DATA_VERSION: &str = "2.0";

// =============================================================================
// EXPORT
// =============================================================================

pub const EXPORT_FILENAME: &str = "civic-radar-reports.json";
