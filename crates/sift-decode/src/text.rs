//! Plain-text decoding with lossy encoding fallback.

use crate::error::DecodeResult;
use crate::registry::TextDecoder;
use std::fs;
use std::path::Path;

/// Decoder for `.txt` files.
///
/// Tries strict UTF-8 first; anything else is decoded as WINDOWS-1252 with
/// replacement characters. Unusual or mis-detected encodings therefore
/// degrade to lossy text rather than failing the file.
#[derive(Debug, Default)]
pub struct PlainTextDecoder;

impl TextDecoder for PlainTextDecoder {
    fn decode(&self, path: &Path) -> DecodeResult<String> {
        let bytes = fs::read(path)?;
        Ok(decode_lossy(&bytes))
    }
}

/// Best-effort conversion of raw bytes to a UTF-8 string.
pub(crate) fn decode_lossy(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            tracing::debug!("Input is not UTF-8, falling back to WINDOWS-1252");
            let (text, _, had_errors) = encoding_rs::WINDOWS_1252.decode(bytes);
            if had_errors {
                tracing::debug!("Lossy decode replaced undecodable bytes");
            }
            text.into_owned()
        }
    }
}
