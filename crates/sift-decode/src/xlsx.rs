//! Spreadsheet (`.xlsx`) decoding.

use crate::error::{DecodeError, DecodeResult};
use crate::registry::TextDecoder;
use calamine::{open_workbook, Reader, Xlsx};
use std::path::Path;

/// Decoder for `.xlsx` files, backed by `calamine`.
///
/// Every cell of every sheet is rendered to text; cells in a row are
/// space-joined, rows become lines. Detection does not care about the
/// grid, only about the strings it holds.
#[derive(Debug, Default)]
pub struct XlsxDecoder;

impl TextDecoder for XlsxDecoder {
    fn decode(&self, path: &Path) -> DecodeResult<String> {
        let mut workbook: Xlsx<_> =
            open_workbook(path).map_err(|e: calamine::XlsxError| DecodeError::Malformed {
                format: "xlsx",
                reason: e.to_string(),
            })?;

        let mut out = String::new();
        for (sheet_name, range) in workbook.worksheets() {
            tracing::debug!("Decoding sheet '{}'", sheet_name);
            for row in range.rows() {
                let mut first = true;
                for cell in row {
                    let value = cell.to_string();
                    if value.is_empty() {
                        continue;
                    }
                    if !first {
                        out.push(' ');
                    }
                    out.push_str(&value);
                    first = false;
                }
                out.push('\n');
            }
        }
        Ok(out)
    }
}
