//! Decoder trait and extension registry.

use crate::docx::DocxDecoder;
use crate::error::{DecodeError, DecodeResult};
use crate::pdf::PdfDecoder;
use crate::text::PlainTextDecoder;
use crate::xlsx::XlsxDecoder;
use std::collections::HashMap;
use std::path::Path;

/// Turns one document format into normalized UTF-8 text.
///
/// Implementations must be thread-safe: decoding runs on blocking worker
/// threads, one file per task.
pub trait TextDecoder: Send + Sync {
    /// Decode the document at `path` into normalized text.
    ///
    /// # Errors
    /// Returns `DecodeError` when the file is unreadable or structurally
    /// malformed. Unusual text *encodings* must not fail; they are decoded
    /// lossily instead.
    fn decode(&self, path: &Path) -> DecodeResult<String>;
}

/// Static mapping from file extension to decoder instance.
///
/// Built once per run. Dispatch is a typed lookup: an extension with no
/// decoder is an `UnsupportedExtension` outcome, not a fallthrough branch.
pub struct DecoderRegistry {
    decoders: HashMap<&'static str, Box<dyn TextDecoder>>,
}

impl DecoderRegistry {
    /// Registry covering the standard format set (`txt`, `docx`, `pdf`, `xlsx`).
    #[must_use]
    pub fn standard() -> Self {
        let mut decoders: HashMap<&'static str, Box<dyn TextDecoder>> = HashMap::new();
        decoders.insert("txt", Box::new(PlainTextDecoder));
        decoders.insert("docx", Box::new(DocxDecoder));
        decoders.insert("pdf", Box::new(PdfDecoder));
        decoders.insert("xlsx", Box::new(XlsxDecoder));
        Self { decoders }
    }

    /// Empty registry, for callers assembling a custom format set.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Register a decoder for an extension (lowercase, no leading dot).
    pub fn register(&mut self, extension: &'static str, decoder: Box<dyn TextDecoder>) {
        self.decoders.insert(extension, decoder);
    }

    /// Whether an extension has a decoder.
    #[must_use]
    pub fn supports(&self, extension: &str) -> bool {
        self.decoders.contains_key(extension)
    }

    /// Decode the file at `path`, dispatching on its (lowercased) extension.
    pub fn decode(&self, path: &Path) -> DecodeResult<String> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        let decoder = self
            .decoders
            .get(extension.as_str())
            .ok_or_else(|| DecodeError::UnsupportedExtension(extension.clone()))?;

        decoder.decode(path)
    }
}

impl Default for DecoderRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_standard_registry_coverage() {
        let registry = DecoderRegistry::standard();
        for extension in ["txt", "docx", "pdf", "xlsx"] {
            assert!(registry.supports(extension), "missing decoder for {extension}");
        }
        assert!(!registry.supports("jpg"));
        assert!(!registry.supports("zip"));
    }

    #[test]
    fn test_decode_dispatches_by_extension() {
        let mut file = tempfile::NamedTempFile::with_suffix(".txt").unwrap();
        file.write_all(b"plain contents").unwrap();

        let registry = DecoderRegistry::standard();
        assert_eq!(registry.decode(file.path()).unwrap(), "plain contents");
    }

    #[test]
    fn test_decode_unknown_extension_is_typed() {
        let registry = DecoderRegistry::standard();
        let result = registry.decode(Path::new("photo.jpg"));
        assert!(matches!(
            result,
            Err(DecodeError::UnsupportedExtension(ext)) if ext == "jpg"
        ));
    }

    #[test]
    fn test_extension_lookup_is_case_insensitive() {
        let mut file = tempfile::NamedTempFile::with_suffix(".TXT").unwrap();
        file.write_all(b"shouting").unwrap();

        let registry = DecoderRegistry::standard();
        assert_eq!(registry.decode(file.path()).unwrap(), "shouting");
    }
}
