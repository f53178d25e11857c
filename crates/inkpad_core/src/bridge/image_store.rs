//! Image storage collaborator contract.
//!
//! # Responsibility
//! - Describe the image-slot surface the host backend exposes.
//! - Encode raw image bytes into the bridge's textual byte-array form.
//!
//! # Invariants
//! - Both operations return the site-relative path of the stored image.
//! - The blob text is a JSON array of decimal byte values (`[1,2,3]`), the
//!   form the backend decodes with a plain JSON unmarshal.

use super::Reply;

/// Host-side image persistence reached over the bridge.
pub trait ImageStore {
    /// Asks the host to pick and store an image for the article (e.g. via a
    /// native file dialog), returning its path.
    fn insert_image(&self, article_id: Option<&str>) -> Reply<String>;

    /// Stores pasted/dropped image bytes, pre-encoded with
    /// [`encode_image_blob`], returning the stored path.
    fn insert_image_blob(&self, article_id: Option<&str>, blob: &str) -> Reply<String>;
}

impl<T: ImageStore + ?Sized> ImageStore for &T {
    fn insert_image(&self, article_id: Option<&str>) -> Reply<String> {
        (**self).insert_image(article_id)
    }

    fn insert_image_blob(&self, article_id: Option<&str>, blob: &str) -> Reply<String> {
        (**self).insert_image_blob(article_id, blob)
    }
}

/// Encodes raw bytes as the bridge's textual byte-array form.
///
/// Empty input encodes as `[]`.
pub fn encode_image_blob(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len().saturating_mul(4) + 2);
    out.push('[');
    for (index, byte) in bytes.iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        out.push_str(&byte.to_string());
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::encode_image_blob;

    #[test]
    fn empty_input_encodes_as_empty_array() {
        assert_eq!(encode_image_blob(&[]), "[]");
    }

    #[test]
    fn bytes_encode_as_decimal_list() {
        assert_eq!(encode_image_blob(&[1, 2, 3]), "[1,2,3]");
        assert_eq!(encode_image_blob(&[0, 255]), "[0,255]");
    }

    #[test]
    fn encoding_is_json_compatible() {
        let bytes = [137_u8, 80, 78, 71, 13, 10, 26, 10];
        let decoded: Vec<u8> = serde_json::from_str(&encode_image_blob(&bytes)).unwrap();
        assert_eq!(decoded, bytes);
    }
}
