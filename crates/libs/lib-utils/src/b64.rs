//! # Image Payload Encoding
//!
//! Listings are uploaded with their photos inlined as base64 data URIs
//! (`data:image/jpeg;base64,...`). These helpers build them.

use base64::{engine::general_purpose, Engine as _};

/// Encode bytes to standard base64 (with padding).
pub fn b64_encode(content: impl AsRef<[u8]>) -> String {
    general_purpose::STANDARD.encode(content)
}

/// Guess an image MIME type from its magic bytes.
pub fn sniff_image_mime(bytes: &[u8]) -> Option<&'static str> {
    match bytes {
        [0xFF, 0xD8, 0xFF, ..] => Some("image/jpeg"),
        [0x89, b'P', b'N', b'G', ..] => Some("image/png"),
        [b'G', b'I', b'F', b'8', ..] => Some("image/gif"),
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some("image/webp"),
        _ => None,
    }
}

/// Build a data URI for an image. Falls back to `image/jpeg` when the
/// format is not recognised, matching what camera pickers produce.
pub fn image_data_uri(bytes: &[u8]) -> String {
    let mime = sniff_image_mime(bytes).unwrap_or("image/jpeg");
    format!("data:{};base64,{}", mime, b64_encode(bytes))
}
