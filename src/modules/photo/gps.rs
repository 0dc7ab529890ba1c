use std::io::Cursor;

use exif::{Exif, In, Reader, Tag, Value};

/// Decimal-degree position read from photo metadata
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpsPosition {
    pub lat: f64,
    pub lng: f64,
}

/// Read the GPS position embedded in an image (JPEG, TIFF, PNG, WebP, HEIF)
///
/// Missing or unreadable metadata is not an error; most photos carry none.
pub fn read_gps_position(image: &[u8]) -> Option<GpsPosition> {
    let exif = match Reader::new().read_from_container(&mut Cursor::new(image)) {
        Ok(exif) => exif,
        Err(e) => {
            tracing::debug!("No readable EXIF in photo: {}", e);
            return None;
        }
    };

    let lat = coordinate(&exif, Tag::GPSLatitude, Tag::GPSLatitudeRef, b'S')?;
    let lng = coordinate(&exif, Tag::GPSLongitude, Tag::GPSLongitudeRef, b'W')?;

    if !lat.is_finite() || !lng.is_finite() || lat.abs() > 90.0 || lng.abs() > 180.0 {
        tracing::debug!("Ignoring out-of-range photo GPS position ({}, {})", lat, lng);
        return None;
    }

    Some(GpsPosition { lat, lng })
}

/// Degrees/minutes/seconds plus hemisphere reference, as signed decimal degrees
fn coordinate(exif: &Exif, value_tag: Tag, ref_tag: Tag, negative_ref: u8) -> Option<f64> {
    let dms = match &exif.get_field(value_tag, In::PRIMARY)?.value {
        Value::Rational(parts) if !parts.is_empty() => parts
            .iter()
            .map(|r| {
                if r.denom == 0 {
                    None
                } else {
                    Some(f64::from(r.num) / f64::from(r.denom))
                }
            })
            .collect::<Option<Vec<f64>>>()?,
        _ => return None,
    };

    let degrees = dms.first().copied().unwrap_or_default()
        + dms.get(1).copied().unwrap_or_default() / 60.0
        + dms.get(2).copied().unwrap_or_default() / 3600.0;

    let hemisphere = match exif.get_field(ref_tag, In::PRIMARY).map(|f| &f.value) {
        Some(Value::Ascii(parts)) => parts.first().and_then(|p| p.first()).copied(),
        _ => None,
    };

    match hemisphere.map(|b| b.to_ascii_uppercase()) {
        Some(b) if b == negative_ref => Some(-degrees),
        _ => Some(degrees),
    }
}
