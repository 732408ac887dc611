//! PDF decoding.

use crate::error::{DecodeError, DecodeResult};
use crate::registry::TextDecoder;
use std::path::Path;

/// Decoder for `.pdf` files, backed by `pdf-extract`.
///
/// Anything the extractor rejects (corrupt xref tables, encrypted bodies,
/// non-PDF bytes behind a `.pdf` name) is reported as a malformed document.
#[derive(Debug, Default)]
pub struct PdfDecoder;

impl TextDecoder for PdfDecoder {
    fn decode(&self, path: &Path) -> DecodeResult<String> {
        pdf_extract::extract_text(path).map_err(|e| DecodeError::Malformed {
            format: "pdf",
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_decode_garbage_pdf_is_malformed() {
        let mut file = tempfile::NamedTempFile::with_suffix(".pdf").unwrap();
        file.write_all(b"%PDF-1.7 truncated garbage").unwrap();

        let result = PdfDecoder.decode(file.path());
        assert!(matches!(
            result,
            Err(DecodeError::Malformed { format: "pdf", .. })
        ));
    }
}
