use std::sync::Arc;

use crate::core::config::SeedPolicy;
use crate::features::reports::models::{Coordinate, Locality, NewReport, ReportSource, ReportStatus};
use crate::features::reports::services::ReportStore;
use crate::modules::storage::MemoryStorage;

/// Store over fresh in-memory storage, populated with the seed dataset
pub fn seeded_store() -> ReportStore {
    ReportStore::initialize(Arc::new(MemoryStorage::new()), SeedPolicy::RestoreIfSmaller)
        .expect("memory storage never fails")
}

/// Draft as produced by the submission flow
pub fn new_report(title: &str) -> NewReport {
    NewReport {
        title: title.to_string(),
        description: title.to_string(),
        category: "Other".to_string(),
        location: Locality("Coimbatore".to_string(), "641001".to_string()),
        geo: Coordinate::new(11.0168, 76.9558),
        image: "data:image/png;base64,iVBORw0KGgo=".to_string(),
        status: ReportStatus::Reported,
        source: ReportSource::App,
    }
}

pub fn map_config() -> crate::core::config::MapConfig {
    crate::core::config::MapConfig {
        tile_url: "https://{s}.tile.example.org/{z}/{x}/{y}.png".to_string(),
        tile_subdomains: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        attribution: "&copy; OpenStreetMap contributors".to_string(),
        default_center: Coordinate::new(11.0168, 76.9558),
        default_zoom: 13,
        tile_timeout: std::time::Duration::from_secs(5),
    }
}

/// Minimal little-endian TIFF carrying only a GPS IFD
pub fn tiff_with_gps(lat: [(u32, u32); 3], lat_ref: u8, lng: [(u32, u32); 3], lng_ref: u8) -> Vec<u8> {
    const GPS_IFD: u32 = 26;
    const LAT_DATA: u32 = 80;
    const LNG_DATA: u32 = 104;

    fn entry(out: &mut Vec<u8>, tag: u16, kind: u16, count: u32, value: [u8; 4]) {
        out.extend_from_slice(&tag.to_le_bytes());
        out.extend_from_slice(&kind.to_le_bytes());
        out.extend_from_slice(&count.to_le_bytes());
        out.extend_from_slice(&value);
    }

    let mut out = Vec::new();
    out.extend_from_slice(b"II");
    out.extend_from_slice(&42u16.to_le_bytes());
    out.extend_from_slice(&8u32.to_le_bytes());

    // IFD0: GPSInfo pointer only
    out.extend_from_slice(&1u16.to_le_bytes());
    entry(&mut out, 0x8825, 4, 1, GPS_IFD.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());

    // GPS IFD
    out.extend_from_slice(&4u16.to_le_bytes());
    entry(&mut out, 0x0001, 2, 2, [lat_ref, 0, 0, 0]);
    entry(&mut out, 0x0002, 5, 3, LAT_DATA.to_le_bytes());
    entry(&mut out, 0x0003, 2, 2, [lng_ref, 0, 0, 0]);
    entry(&mut out, 0x0004, 5, 3, LNG_DATA.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());

    for (num, denom) in lat.iter().chain(lng.iter()) {
        out.extend_from_slice(&num.to_le_bytes());
        out.extend_from_slice(&denom.to_le_bytes());
    }
    out
}
