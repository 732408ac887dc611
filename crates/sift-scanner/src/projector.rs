//! Report projection boundary.
//!
//! The engine hands renderers a [`ScanReport`]; projectors map it 1:1 into
//! a presentation artifact. Every projector emits one row per logical path
//! with the same eight columns: the file path plus one column per
//! detection category. Failure rows carry a uniform error marker in every
//! category column, so a failed file can never be misread as a clean one.

use crate::error::Result;
use sift_core::{DetectionCategory, FileOutcome, ScanReport};
use serde_json::{json, Value};

/// Renders a [`ScanReport`] into some presentation format.
///
/// Implementations must not reorder, drop, or merge rows; the report's
/// discovery order is part of its contract.
pub trait ReportProjector {
    /// Render the report.
    fn project(&self, report: &ScanReport) -> Result<String>;
}

/// Column heading for the file-path column.
pub const PATH_COLUMN: &str = "File Path";

/// Projects the report as a JSON array of row objects.
#[derive(Debug, Default)]
pub struct JsonProjector {
    pretty: bool,
}

impl JsonProjector {
    /// Compact output.
    #[must_use]
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Human-reviewable indented output.
    #[must_use]
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    fn row_value(logical_path: &str, outcome: &FileOutcome) -> Value {
        let mut row = serde_json::Map::new();
        row.insert(PATH_COLUMN.to_string(), json!(logical_path));

        match outcome {
            FileOutcome::Findings { matches } => {
                for category in DetectionCategory::ALL {
                    row.insert(
                        category.label().to_string(),
                        json!(matches.values(category)),
                    );
                }
            }
            FileOutcome::Failure { message, .. } => {
                let marker = format!("ERROR: {message}");
                for category in DetectionCategory::ALL {
                    row.insert(category.label().to_string(), json!(marker));
                }
            }
        }
        Value::Object(row)
    }
}

impl ReportProjector for JsonProjector {
    fn project(&self, report: &ScanReport) -> Result<String> {
        let rows: Vec<Value> = report
            .rows()
            .iter()
            .map(|row| Self::row_value(&row.logical_path, &row.outcome))
            .collect();

        let value = Value::Array(rows);
        let rendered = if self.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(rendered)
    }
}
