//! Chat export decoding — strict UTF-8, then Latin-1.
//!
//! WhatsApp exports from older phones are sometimes not UTF-8. Rather than
//! refuse the upload, fall back to ISO-8859-1, which maps every byte to a
//! code point. Characters may come out wrong; the user still gets a result.

use thiserror::Error;

#[derive(Debug, Error)]
#[error("chat log is neither valid UTF-8 nor Latin-1 (first bad byte at offset {offset})")]
pub struct DecodeError {
    pub offset: usize,
}

/// Which decoding produced the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Latin1,
}

/// Decode an uploaded chat log.
pub fn decode_chat_log(raw: &[u8]) -> Result<(String, TextEncoding), DecodeError> {
    match std::str::from_utf8(raw) {
        Ok(text) => Ok((text.to_string(), TextEncoding::Utf8)),
        Err(utf8_err) => {
            log::warn!(
                "[INPUT] Chat log is not UTF-8 (bad byte at {}), retrying as Latin-1",
                utf8_err.valid_up_to()
            );
            decode_latin1(raw).map(|text| (text, TextEncoding::Latin1))
        }
    }
}

/// ISO-8859-1: byte value == code point.
fn decode_latin1(raw: &[u8]) -> Result<String, DecodeError> {
    raw.iter()
        .enumerate()
        .map(|(offset, &byte)| char::from_u32(u32::from(byte)).ok_or(DecodeError { offset }))
        .collect()
}
