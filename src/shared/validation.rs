use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Inline image as produced by a browser file reader
    /// - Valid: "data:image/jpeg;base64,/9j/4AAQ", "data:image/svg+xml;base64,PHN2Zz4="
    /// - Invalid: "data:text/plain;base64,aGk=", "https://example.org/a.png", "data:image/png,raw"
    pub static ref IMAGE_DATA_URI_REGEX: Regex =
        Regex::new(r"^data:(image/[A-Za-z0-9.+-]+);base64,([A-Za-z0-9+/=\r\n]+)$").unwrap();
}

/// Rejects empty and whitespace-only strings
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_data_uri_valid() {
        assert!(IMAGE_DATA_URI_REGEX.is_match("data:image/jpeg;base64,/9j/4AAQ"));
        assert!(IMAGE_DATA_URI_REGEX.is_match("data:image/png;base64,iVBORw0KGgo="));
        assert!(IMAGE_DATA_URI_REGEX.is_match("data:image/svg+xml;base64,PHN2Zz4="));
    }

    #[test]
    fn test_image_data_uri_invalid() {
        assert!(!IMAGE_DATA_URI_REGEX.is_match("data:text/plain;base64,aGk=")); // not an image
        assert!(!IMAGE_DATA_URI_REGEX.is_match("https://example.org/a.png")); // url
        assert!(!IMAGE_DATA_URI_REGEX.is_match("data:image/png,raw")); // not base64
        assert!(!IMAGE_DATA_URI_REGEX.is_match("data:image/png;base64,")); // empty payload
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("Pothole").is_ok());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_err());
    }
}
