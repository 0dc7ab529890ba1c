use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::shared::validation::IMAGE_DATA_URI_REGEX;

/// Decode the image bytes of a `data:image/...;base64,` URI
///
/// Returns `None` for anything that is not a base64 image data URI.
pub fn decode_image_data_uri(uri: &str) -> Option<Vec<u8>> {
    let captures = IMAGE_DATA_URI_REGEX.captures(uri.trim())?;
    let payload: String = captures
        .get(2)?
        .as_str()
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    match STANDARD.decode(payload) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            tracing::debug!("Photo data URI is not valid base64: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_png_data_uri() {
        let bytes = decode_image_data_uri("data:image/PNG;base64,aGVsbG8=").unwrap();
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn test_rejects_non_images_and_bad_base64() {
        assert!(decode_image_data_uri("data:text/plain;base64,aGVsbG8=").is_none());
        assert!(decode_image_data_uri("data:image/png;base64,a").is_none());
        assert!(decode_image_data_uri("").is_none());
    }
}
