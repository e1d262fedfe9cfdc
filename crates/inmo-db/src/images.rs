//! Image-list codec for the serialized-text `images` column.
//!
//! SurrealDB could store the list natively, but the property table
//! keeps the original single-text-column layout, so the ordered URL
//! list is serialized to JSON array text on write and decoded on
//! read. The codec is a migration shim: it lives entirely inside this
//! crate and repository callers only ever see `Vec<String>`.

use crate::error::DbError;

/// Serialize an ordered list of image URLs to its stored text form.
///
/// JSON array encoding is deterministic, order-preserving, and
/// escape-safe for URLs containing delimiter-like characters.
pub fn encode_images(images: &[String]) -> Result<String, DbError> {
    serde_json::to_string(images).map_err(|e| DbError::Encode(format!("encoding images: {e}")))
}

/// Decode stored text back into the ordered URL list.
///
/// Fails explicitly on anything that is not valid `encode_images`
/// output — malformed JSON, a non-array, non-string elements, or an
/// empty array (a persisted listing always has at least one image).
/// Never silently yields an empty list.
pub fn decode_images(raw: &str) -> Result<Vec<String>, DbError> {
    let images: Vec<String> = serde_json::from_str(raw)
        .map_err(|e| DbError::Decode(format!("malformed image list text: {e}")))?;
    if images.is_empty() {
        return Err(DbError::Decode("empty image list in stored row".into()));
    }
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_any_nonempty_list() {
        let cases: &[&[&str]] = &[
            &["a.jpg"],
            &["a.jpg", "b.jpg"],
            &["https://example.com/x?w=800&h=600", "https://example.com/y#frag"],
            // Structural characters inside a URL must survive.
            &["weird\",[]{}url", "with\\backslash", "with\nnewline"],
        ];
        for case in cases {
            let list: Vec<String> = case.iter().map(|s| s.to_string()).collect();
            let encoded = encode_images(&list).unwrap();
            assert_eq!(decode_images(&encoded).unwrap(), list);
        }
    }

    #[test]
    fn order_is_preserved() {
        let list = vec!["z.jpg".to_string(), "a.jpg".to_string(), "m.jpg".to_string()];
        let decoded = decode_images(&encode_images(&list).unwrap()).unwrap();
        assert_eq!(decoded, list);
    }

    #[test]
    fn malformed_text_is_rejected() {
        for bad in ["", "not json", "{\"a\":1}", "[1,2,3]", "\"a.jpg\"", "[\"a.jpg\""] {
            assert!(decode_images(bad).is_err(), "accepted malformed input {bad:?}");
        }
    }

    #[test]
    fn empty_array_is_an_integrity_fault() {
        assert!(decode_images("[]").is_err());
    }
}
