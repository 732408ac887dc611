//! Word-processor (`.docx`) decoding.
//!
//! A `.docx` is a zip container; the document body lives in
//! `word/document.xml`. Text runs are `<w:t>` elements and paragraphs map
//! to newlines in the normalized output.

use crate::error::{DecodeError, DecodeResult};
use crate::registry::TextDecoder;
use crate::text::decode_lossy;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Decoder for `.docx` files.
#[derive(Debug, Default)]
pub struct DocxDecoder;

impl TextDecoder for DocxDecoder {
    fn decode(&self, path: &Path) -> DecodeResult<String> {
        let file = File::open(path)?;
        let mut archive = zip::ZipArchive::new(file).map_err(|e| DecodeError::Malformed {
            format: "docx",
            reason: format!("not a zip container: {e}"),
        })?;

        let mut xml_bytes = Vec::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| DecodeError::Malformed {
                format: "docx",
                reason: format!("missing word/document.xml: {e}"),
            })?
            .read_to_end(&mut xml_bytes)?;

        extract_document_text(&decode_lossy(&xml_bytes))
    }
}

/// Pull visible text out of a WordprocessingML document body.
fn extract_document_text(xml: &str) -> DecodeResult<String> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => out.push('\n'),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text_run => {
                let text = t.unescape().map_err(|e| DecodeError::Malformed {
                    format: "docx",
                    reason: format!("bad XML entity: {e}"),
                })?;
                out.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(DecodeError::Malformed {
                    format: "docx",
                    reason: format!("invalid XML: {e}"),
                })
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    const DOC_XML: &str = concat!(
        r#"<?xml version="1.0"?>"#,
        r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
        r#"<w:body>"#,
        r#"<w:p><w:r><w:t>Contact jane@example.com</w:t></w:r></w:p>"#,
        r#"<w:p><w:r><w:t>on 0412 345 678</w:t></w:r></w:p>"#,
        r#"</w:body></w:document>"#,
    );

    fn write_docx(xml: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::with_suffix(".docx").unwrap();
        let mut writer = zip::ZipWriter::new(file.reopen().unwrap());
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap();
        file
    }

    #[test]
    fn test_decode_docx_text_runs_and_paragraphs() {
        let file = write_docx(DOC_XML);
        let text = DocxDecoder.decode(file.path()).unwrap();
        assert_eq!(text, "Contact jane@example.com\non 0412 345 678\n");
    }

    #[test]
    fn test_decode_not_a_zip_is_malformed() {
        let mut file = tempfile::NamedTempFile::with_suffix(".docx").unwrap();
        file.write_all(b"this is not a zip archive").unwrap();

        let result = DocxDecoder.decode(file.path());
        assert!(matches!(
            result,
            Err(DecodeError::Malformed { format: "docx", .. })
        ));
    }

    #[test]
    fn test_decode_zip_without_document_xml_is_malformed() {
        let file = tempfile::NamedTempFile::with_suffix(".docx").unwrap();
        let mut writer = zip::ZipWriter::new(file.reopen().unwrap());
        writer
            .start_file("unrelated.txt", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"nothing here").unwrap();
        writer.finish().unwrap();

        let result = DocxDecoder.decode(file.path());
        assert!(matches!(result, Err(DecodeError::Malformed { .. })));
    }
}
