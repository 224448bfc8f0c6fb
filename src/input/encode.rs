//! Screenshot encoding for the multimodal request.

use base64::Engine;

/// Base64-encode raw image bytes. Empty input gives an empty string.
pub fn encode_image(raw: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(raw)
}

/// Wrap an encoded image as a data URI.
///
/// Always labelled JPEG, whatever the upload actually was; the vision
/// endpoint sniffs the bytes.
pub fn image_data_uri(image_base64: &str) -> String {
    format!("data:image/jpeg;base64,{}", image_base64)
}
