//! Shared report model for the sift scanner.
//!
//! These types define the stable, serializable shape handed from the
//! detection engine to whatever renders the final report. They carry no
//! rendering concerns of their own.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::path::PathBuf;

/// Closed taxonomy of sensitive-data categories the engine detects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DetectionCategory {
    /// Email addresses
    Email,
    /// Phone numbers (Australian numbering plan, canonical form)
    Phone,
    /// Payment card numbers
    CreditCard,
    /// Australian Tax File Numbers (checksum-validated)
    TaxFileNumber,
    /// Medicare card numbers
    MedicareNumber,
    /// Centrelink Customer Reference Numbers
    CentrelinkCrn,
    /// Named persons
    PersonName,
}

impl DetectionCategory {
    /// All categories, in report column order.
    pub const ALL: [DetectionCategory; 7] = [
        DetectionCategory::Email,
        DetectionCategory::Phone,
        DetectionCategory::PersonName,
        DetectionCategory::CreditCard,
        DetectionCategory::TaxFileNumber,
        DetectionCategory::MedicareNumber,
        DetectionCategory::CentrelinkCrn,
    ];

    /// Human-readable column heading for report output.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            DetectionCategory::Email => "Emails",
            DetectionCategory::Phone => "Phone Numbers",
            DetectionCategory::CreditCard => "Credit Cards",
            DetectionCategory::TaxFileNumber => "Tax File Numbers",
            DetectionCategory::MedicareNumber => "Medicare Numbers",
            DetectionCategory::CentrelinkCrn => "Centrelink CRNs",
            DetectionCategory::PersonName => "Person Names",
        }
    }
}

impl fmt::Display for DetectionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-file detection results: category to the set of unique values found.
///
/// Every category is always present, so an empty result is distinguishable
/// from a missing one. Values within a category are deduplicated and
/// order-insensitive; categories are never cross-validated against each
/// other, so the same span may appear under more than one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSet {
    matches: BTreeMap<DetectionCategory, BTreeSet<String>>,
}

impl MatchSet {
    /// Create an empty match set with every category present.
    #[must_use]
    pub fn new() -> Self {
        let mut matches = BTreeMap::new();
        for category in DetectionCategory::ALL {
            matches.insert(category, BTreeSet::new());
        }
        Self { matches }
    }

    /// Record a value under a category. Duplicates collapse silently.
    pub fn insert(&mut self, category: DetectionCategory, value: impl Into<String>) {
        self.matches.entry(category).or_default().insert(value.into());
    }

    /// Record every value from an iterator under one category.
    pub fn extend(
        &mut self,
        category: DetectionCategory,
        values: impl IntoIterator<Item = String>,
    ) {
        self.matches.entry(category).or_default().extend(values);
    }

    /// Values recorded for a category, in sorted order.
    #[must_use]
    pub fn values(&self, category: DetectionCategory) -> Vec<&str> {
        self.matches
            .get(&category)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// True if no category holds any value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.values().all(BTreeSet::is_empty)
    }

    /// Total number of unique values across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.values().map(BTreeSet::len).sum()
    }
}

impl Default for MatchSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Which subsystem produced a per-file failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The file could not be decoded to text
    Decode,
    /// An archive could not be expanded (corrupt, unsafe path, depth exceeded)
    Extraction,
    /// A detector failed fatally for this file (e.g. NER timeout)
    Detector,
}

/// Outcome of processing one logical file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// The file decoded and all detectors ran
    Findings {
        /// Everything the detectors found, possibly empty
        matches: MatchSet,
    },
    /// The file could not be fully processed
    Failure {
        /// Subsystem that failed
        kind: FailureKind,
        /// Human-readable reason, preserved verbatim in the report
        message: String,
    },
}

/// One report row, pairing a logical path with its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Stable, report-facing identifier for the content
    pub logical_path: String,
    /// What happened to it
    pub outcome: FileOutcome,
}

/// The consolidated result of one scan run.
///
/// Rows are keyed by unique logical path and kept in discovery order;
/// recording the same path twice overwrites in place (last write wins,
/// original position kept). Rows are never removed once written.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    rows: Vec<ReportRow>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl ScanReport {
    /// Create an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for a logical path.
    pub fn record(&mut self, logical_path: impl Into<String>, outcome: FileOutcome) {
        let logical_path = logical_path.into();
        if let Some(&pos) = self.index.get(&logical_path) {
            tracing::debug!("Overwriting report row for {}", logical_path);
            self.rows[pos].outcome = outcome;
        } else {
            self.index.insert(logical_path.clone(), self.rows.len());
            self.rows.push(ReportRow {
                logical_path,
                outcome,
            });
        }
    }

    /// Look up the outcome for a logical path.
    #[must_use]
    pub fn get(&self, logical_path: &str) -> Option<&FileOutcome> {
        self.index
            .get(logical_path)
            .map(|&pos| &self.rows[pos].outcome)
    }

    /// Rows in discovery order.
    #[must_use]
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if no file produced a row.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl PartialEq for ScanReport {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl Eq for ScanReport {}

/// How the discoverer classified a filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A decodable document
    ContentFile,
    /// An archive container to expand and recurse into
    Archive,
    /// Anything else; reported for diagnostics, never a report row
    Unsupported,
}

/// A filesystem entry found by the discoverer.
///
/// `logical_path` is the identifier the report uses and is stable across
/// archive re-extraction; `physical_location` is where the bytes currently
/// live, possibly inside a scratch extraction directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredEntry {
    /// Report-facing path (archive members are prefixed with their container's path)
    pub logical_path: String,
    /// On-disk location of the bytes
    pub physical_location: PathBuf,
    /// Classification by extension
    pub kind: EntryKind,
}
