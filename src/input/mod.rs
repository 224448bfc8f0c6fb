//! Upload domain — public API.
//!
//! Turns what the user uploaded into an `InputPayload`:
//!   - encode.rs — screenshot bytes → base64 / data URI
//!   - decode.rs — chat export bytes → String (UTF-8, Latin-1 fallback)
//!
//! The upload filter is extension-based only: png/jpg/jpeg for
//! screenshots, txt for chat exports. No size limit is enforced here.

pub mod decode;
pub mod encode;

pub use decode::{decode_chat_log, DecodeError, TextEncoding};
pub use encode::{encode_image, image_data_uri};

use crate::llm::types::InputKind;
use std::path::Path;
use thiserror::Error;

pub const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];
pub const TEXT_EXTENSIONS: [&str; 1] = ["txt"];

/// Characters of a chat log shown before the user confirms analysis.
pub const PREVIEW_CHARS: usize = 1000;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Unsupported file type '{0}' (expected png, jpg, jpeg or txt)")]
    UnsupportedExtension(String),
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// One upload, ready for analysis. Image and text never share a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputPayload {
    Image(Vec<u8>),
    TextLog(String),
}

impl InputPayload {
    pub fn kind(&self) -> InputKind {
        match self {
            InputPayload::Image(_) => InputKind::Image,
            InputPayload::TextLog(_) => InputKind::TextLog,
        }
    }
}

/// Which upload path a file name belongs to, by extension.
pub fn kind_for_file_name(name: &str) -> Result<InputKind, UploadError> {
    let ext = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Ok(InputKind::Image)
    } else if TEXT_EXTENSIONS.contains(&ext.as_str()) {
        Ok(InputKind::TextLog)
    } else {
        Err(UploadError::UnsupportedExtension(name.to_string()))
    }
}

/// Build a payload from an uploaded file's name and bytes.
pub fn payload_from_upload(name: &str, raw: Vec<u8>) -> Result<InputPayload, UploadError> {
    match kind_for_file_name(name)? {
        InputKind::Image => {
            log::info!("[INPUT] Screenshot upload: {} ({} bytes)", name, raw.len());
            Ok(InputPayload::Image(raw))
        }
        InputKind::TextLog => {
            let (text, encoding) = decode_chat_log(&raw)?;
            log::info!(
                "[INPUT] Chat log upload: {} ({} bytes, {:?}, {} lines)",
                name,
                raw.len(),
                encoding,
                text.lines().count()
            );
            Ok(InputPayload::TextLog(text))
        }
    }
}

/// Read an upload from disk.
pub fn read_upload(path: &Path) -> Result<InputPayload, UploadError> {
    let name = path.display().to_string();
    // Reject by extension before touching the file.
    kind_for_file_name(&name)?;
    let raw = std::fs::read(path).map_err(|source| UploadError::Read {
        path: name.clone(),
        source,
    })?;
    payload_from_upload(&name, raw)
}

/// Read a chat export's raw bytes from disk.
///
/// Anything that is not a `.txt` is rejected by name, before the file is
/// opened.
pub fn read_chat_export(path: &Path) -> Result<Vec<u8>, UploadError> {
    let name = path.display().to_string();
    if kind_for_file_name(&name)? != InputKind::TextLog {
        return Err(UploadError::UnsupportedExtension(name));
    }
    std::fs::read(path).map_err(|source| UploadError::Read { path: name, source })
}

/// First `PREVIEW_CHARS` characters of a chat log, with a trailing ellipsis.
pub fn preview(chat_log: &str) -> String {
    let head: String = chat_log.chars().take(PREVIEW_CHARS).collect();
    format!("{}...", head)
}
