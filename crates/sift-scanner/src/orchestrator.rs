//! Scan orchestration: discovery, bounded per-file work, archive recursion.

use crate::aggregator::ResultAggregator;
use crate::error::{Result, ScanError};
use futures::future::BoxFuture;
use futures::stream::{self, StreamExt};
use sift_core::{
    DiscoveredEntry, EntryKind, FailureKind, FileOutcome, ScanConfig, ScanReport,
};
use sift_decode::{DecodeError, DecoderRegistry};
use sift_detect::DetectionEngine;
use sift_discovery::{ArchiveExpander, Discoverer, ExtractionError, SUPPORTED_EXTENSIONS};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

type Row = (String, FileOutcome);

/// Coordinates one scan run end to end.
///
/// Collaborators are constructed once and passed in; the constructor
/// validates them (decoder coverage for every content extension, an NER
/// capability that answers at all) so a misconfigured run fails before any
/// file is touched rather than producing a silently incomplete report.
///
/// Per-file decode + detect runs concurrently up to
/// `max_concurrent_files`; ordered buffered streams keep report rows in
/// discovery order, with archive members following their container. Each
/// archive is expanded by exactly one task, so writes to its extraction
/// directory are serialized while unrelated archives expand in parallel.
pub struct ScanOrchestrator {
    registry: Arc<DecoderRegistry>,
    engine: Arc<DetectionEngine>,
    expander: Arc<ArchiveExpander>,
    decode_permits: Arc<Semaphore>,
    config: ScanConfig,
}

impl ScanOrchestrator {
    /// Create an orchestrator, validating collaborators up front.
    pub fn new(
        registry: Arc<DecoderRegistry>,
        engine: Arc<DetectionEngine>,
        config: ScanConfig,
    ) -> Result<Self> {
        for extension in SUPPORTED_EXTENSIONS {
            if *extension == "zip" {
                continue;
            }
            if !registry.supports(extension) {
                return Err(ScanError::MissingDecoder { extension });
            }
        }
        if !engine.extractor_available() {
            return Err(ScanError::NerUnavailable);
        }

        let permits = config.max_concurrent_files.max(1);
        Ok(Self {
            registry,
            engine,
            expander: Arc::new(ArchiveExpander),
            decode_permits: Arc::new(Semaphore::new(permits)),
            config,
        })
    }

    /// Scan the tree rooted at `root` and return the consolidated report.
    ///
    /// # Errors
    /// Only run-fatal conditions error here (unreadable root, scratch
    /// directory failure). Everything file-scoped lands in the report as a
    /// `Failure` row instead.
    pub async fn run(&self, root: &Path) -> Result<ScanReport> {
        let scratch = tempfile::tempdir()?;
        let entries: Vec<DiscoveredEntry> = Discoverer::new(root, "")?.collect();
        info!(
            "Discovered {} entries under {}",
            entries.len(),
            root.display()
        );

        let rows = self.process_entries(entries, 0, scratch.path()).await;

        let aggregator = ResultAggregator::new();
        for (logical_path, outcome) in rows {
            aggregator.record(logical_path, outcome);
        }
        let report = aggregator.finalize();
        info!("Scan complete: {} report rows", report.len());
        Ok(report)
    }

    /// Process one discovery batch with bounded, order-preserving
    /// concurrency. Boxed because archive members recurse through here.
    fn process_entries<'a>(
        &'a self,
        entries: Vec<DiscoveredEntry>,
        depth: usize,
        scratch: &'a Path,
    ) -> BoxFuture<'a, Vec<Row>> {
        Box::pin(async move {
            let buffer_width = self.config.max_concurrent_files.max(1);
            let nested: Vec<Vec<Row>> = stream::iter(entries)
                .map(|entry| self.process_entry(entry, depth, scratch))
                .buffered(buffer_width)
                .collect()
                .await;
            nested.into_iter().flatten().collect()
        })
    }

    async fn process_entry(
        &self,
        entry: DiscoveredEntry,
        depth: usize,
        scratch: &Path,
    ) -> Vec<Row> {
        match entry.kind {
            EntryKind::Unsupported => {
                debug!("Skipping unsupported file: {}", entry.logical_path);
                Vec::new()
            }
            EntryKind::ContentFile => vec![self.process_content_file(entry).await],
            EntryKind::Archive => self.process_archive(entry, depth, scratch).await,
        }
    }

    /// Decode + detect one file. Never fails: every path out of here is a
    /// report row.
    async fn process_content_file(&self, entry: DiscoveredEntry) -> Row {
        let _permit = self
            .decode_permits
            .acquire()
            .await
            .expect("semaphore is never closed");

        match tokio::fs::metadata(&entry.physical_location).await {
            Ok(metadata) if metadata.len() > self.config.max_file_size => {
                return failure(
                    entry.logical_path,
                    FailureKind::Decode,
                    DecodeError::TooLarge {
                        size: metadata.len(),
                        cap: self.config.max_file_size,
                    }
                    .to_string(),
                );
            }
            Err(e) => {
                return failure(entry.logical_path, FailureKind::Decode, e.to_string());
            }
            Ok(_) => {}
        }

        let registry = Arc::clone(&self.registry);
        let path = entry.physical_location.clone();
        let decoded = tokio::task::spawn_blocking(move || registry.decode(&path)).await;

        let text = match decoded {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                warn!("Decode failed for {}: {}", entry.logical_path, e);
                return failure(entry.logical_path, FailureKind::Decode, e.to_string());
            }
            Err(e) => {
                return failure(
                    entry.logical_path,
                    FailureKind::Decode,
                    format!("decoder task failed: {e}"),
                );
            }
        };

        match self.engine.detect(&text).await {
            Ok(matches) => {
                debug!(
                    "Detected {} values in {}",
                    matches.len(),
                    entry.logical_path
                );
                (entry.logical_path, FileOutcome::Findings { matches })
            }
            Err(e) => {
                warn!("Detection failed for {}: {}", entry.logical_path, e);
                failure(entry.logical_path, FailureKind::Detector, e.to_string())
            }
        }
    }

    /// Expand one archive and recurse discovery into its extraction root.
    ///
    /// A failed archive contributes exactly one `Failure` row keyed by its
    /// own logical path; entries that would have come from inside it never
    /// appear.
    async fn process_archive(
        &self,
        entry: DiscoveredEntry,
        depth: usize,
        scratch: &Path,
    ) -> Vec<Row> {
        if depth >= self.config.max_archive_depth {
            warn!(
                "Archive nesting limit reached at {}",
                entry.logical_path
            );
            return vec![failure(
                entry.logical_path,
                FailureKind::Extraction,
                ExtractionError::DepthExceeded(self.config.max_archive_depth).to_string(),
            )];
        }

        let expander = Arc::clone(&self.expander);
        let archive_path = entry.physical_location.clone();
        let scratch_dir = scratch.to_path_buf();
        let deadline = Duration::from_secs(self.config.extraction_timeout_secs);

        let expanded = tokio::time::timeout(
            deadline,
            tokio::task::spawn_blocking(move || expander.expand(&archive_path, &scratch_dir)),
        )
        .await;

        let extraction_root = match expanded {
            Err(_) => {
                return vec![failure(
                    entry.logical_path,
                    FailureKind::Extraction,
                    ExtractionError::Timeout(deadline).to_string(),
                )];
            }
            Ok(Err(e)) => {
                return vec![failure(
                    entry.logical_path,
                    FailureKind::Extraction,
                    format!("extraction task failed: {e}"),
                )];
            }
            Ok(Ok(Err(e))) => {
                warn!("Expansion failed for {}: {}", entry.logical_path, e);
                return vec![failure(
                    entry.logical_path,
                    FailureKind::Extraction,
                    e.to_string(),
                )];
            }
            Ok(Ok(Ok(root))) => root,
        };

        let members = match Discoverer::new(&extraction_root, format!("{}/", entry.logical_path)) {
            Ok(walker) => walker.collect::<Vec<_>>(),
            Err(e) => {
                return vec![failure(
                    entry.logical_path,
                    FailureKind::Extraction,
                    e.to_string(),
                )];
            }
        };

        debug!(
            "Archive {} expanded into {} entries",
            entry.logical_path,
            members.len()
        );
        self.process_entries(members, depth + 1, scratch).await
    }
}

fn failure(logical_path: String, kind: FailureKind, message: String) -> Row {
    (logical_path, FileOutcome::Failure { kind, message })
}
