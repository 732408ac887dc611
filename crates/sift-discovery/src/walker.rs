//! Lazy, depth-first discovery of content-bearing files.

use crate::error::DiscoveryError;
use sift_core::{DiscoveredEntry, EntryKind};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Extensions the pipeline knows what to do with. Everything else is
/// classified [`EntryKind::Unsupported`] and reported only as a diagnostic.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "docx", "pdf", "xlsx", "zip"];

/// Classify a path purely by its (lowercased) extension.
#[must_use]
pub fn classify(path: &Path) -> EntryKind {
    let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
        return EntryKind::Unsupported;
    };
    match extension.to_lowercase().as_str() {
        "zip" => EntryKind::Archive,
        ext if SUPPORTED_EXTENSIONS.contains(&ext) => EntryKind::ContentFile,
        _ => EntryKind::Unsupported,
    }
}

/// A lazy, depth-first, non-restartable walk over one root.
///
/// The walker is re-entrant by construction: expanding an archive creates a
/// fresh `Discoverer` over the extraction root, with the archive's logical
/// path as prefix, so nested content keeps stable report-facing paths.
/// Symlinks are skipped to avoid loops and escapes; unreadable subtrees are
/// logged and skipped, only an unreadable *root* is an error.
pub struct Discoverer {
    root: PathBuf,
    logical_prefix: String,
    inner: walkdir::IntoIter,
}

impl Discoverer {
    /// Start a walk at `root`. `logical_prefix` is empty for the scan root
    /// and `"<container path>/"` when re-entering an extraction root.
    pub fn new(
        root: impl Into<PathBuf>,
        logical_prefix: impl Into<String>,
    ) -> Result<Self, DiscoveryError> {
        let root = root.into();
        // Surface an unreadable root eagerly; mid-walk errors are tolerated.
        std::fs::read_dir(&root).map_err(|e| DiscoveryError::RootUnreadable {
            root: root.clone(),
            reason: e.to_string(),
        })?;

        let inner = walkdir::WalkDir::new(&root).min_depth(1).into_iter();
        Ok(Self {
            root,
            logical_prefix: logical_prefix.into(),
            inner,
        })
    }

    fn logical_path(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let parts: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        format!("{}{}", self.logical_prefix, parts.join("/"))
    }
}

impl Iterator for Discoverer {
    type Item = DiscoveredEntry;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", self.root.display(), e);
                    continue;
                }
            };

            if entry.path_is_symlink() {
                debug!("Skipping symlink: {}", entry.path().display());
                continue;
            }
            if !entry.file_type().is_file() {
                continue;
            }

            let kind = classify(entry.path());
            if kind == EntryKind::Unsupported {
                debug!("Unsupported file type: {}", entry.path().display());
            }

            return Some(DiscoveredEntry {
                logical_path: self.logical_path(entry.path()),
                physical_location: entry.into_path(),
                kind,
            });
        }
    }
}
