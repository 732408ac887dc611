//! Safe archive expansion.

use crate::error::ExtractionError;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Expands `.zip` archives into scratch directories for re-discovery.
///
/// Entry names are untrusted input: anything whose resolved path would land
/// outside the extraction root (`../` traversal, absolute paths) aborts the
/// expansion. The expander only ever writes under the scratch parent it is
/// given, never into the tree being scanned.
#[derive(Debug, Default)]
pub struct ArchiveExpander;

impl ArchiveExpander {
    /// Expand `archive_path` into a new `<stem>_extracted` directory under
    /// `scratch_parent`, returning the extraction root.
    ///
    /// The directory name is uniquified when two archives share a stem, so
    /// expansions of unrelated archives can proceed concurrently without
    /// racing each other's directories.
    pub fn expand(
        &self,
        archive_path: &Path,
        scratch_parent: &Path,
    ) -> Result<PathBuf, ExtractionError> {
        let file = File::open(archive_path)?;
        let mut archive = zip::ZipArchive::new(file)
            .map_err(|e| ExtractionError::Malformed(e.to_string()))?;

        let extraction_root = allocate_extraction_root(archive_path, scratch_parent)?;
        debug!(
            "Expanding {} into {}",
            archive_path.display(),
            extraction_root.display()
        );

        for index in 0..archive.len() {
            let mut entry = archive
                .by_index(index)
                .map_err(|e| ExtractionError::Malformed(e.to_string()))?;

            // enclosed_name() resolves the raw entry name and refuses
            // anything that would escape the extraction root.
            let Some(safe_relative) = entry.enclosed_name() else {
                warn!(
                    "Rejecting archive {} with unsafe entry '{}'",
                    archive_path.display(),
                    entry.name()
                );
                return Err(ExtractionError::UnsafePath(entry.name().to_string()));
            };

            let target = extraction_root.join(safe_relative);
            if entry.is_dir() {
                fs::create_dir_all(&target)?;
                continue;
            }
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut out = File::create(&target)?;
            std::io::copy(&mut entry, &mut out)?;
        }

        Ok(extraction_root)
    }
}

/// Pick a fresh `<stem>_extracted` directory under `scratch_parent`.
///
/// Allocation is the `create_dir` call itself: same-stem archives expanding
/// concurrently both ask for `<stem>_extracted`, exactly one creation
/// succeeds, and the loser retries with the next counter. A pre-flight
/// existence probe would let both claim the same directory.
fn allocate_extraction_root(
    archive_path: &Path,
    scratch_parent: &Path,
) -> Result<PathBuf, ExtractionError> {
    let stem = archive_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "archive".to_string());

    let mut counter = 1;
    loop {
        let candidate = if counter == 1 {
            scratch_parent.join(format!("{stem}_extracted"))
        } else {
            scratch_parent.join(format!("{stem}_extracted-{counter}"))
        };
        match fs::create_dir(&candidate) {
            Ok(()) => return Ok(candidate),
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => counter += 1,
            Err(e) => return Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn write_zip(dir: &Path, name: &str, entries: &[(&str, &[u8])]) -> PathBuf {
        let path = dir.join(name);
        let mut writer = zip::ZipWriter::new(File::create(&path).unwrap());
        for (entry_name, contents) in entries {
            writer
                .start_file(*entry_name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(contents).unwrap();
        }
        writer.finish().unwrap();
        path
    }

    #[test]
    fn test_expand_writes_under_extraction_root() {
        let dir = tempfile::tempdir().unwrap();
        let scratch = tempfile::tempdir().unwrap();
        let archive = write_zip(
            dir.path(),
            "bundle.zip",
            &[("inner.txt", b"hello"), ("sub/deep.txt", b"world")],
        );

        let root = ArchiveExpander
            .expand(&archive, scratch.path())
            .unwrap();

        assert!(root.ends_with("bundle_extracted"));
        assert_eq!(fs::read_to_string(root.join("inner.txt")).unwrap(), "hello");
        assert_eq!(
            fs::read_to_string(root.join("sub/deep.txt")).unwrap(),
            "world"
        );
    }

    #[test]
    fn test_expand_rejects_traversal_entries() {
        let dir = tempfile::tempdir().unwrap();
        let scratch = tempfile::tempdir().unwrap();
        let archive = write_zip(dir.path(), "evil.zip", &[("../escape.txt", b"nope")]);

        let result = ArchiveExpander.expand(&archive, scratch.path());
        assert!(matches!(result, Err(ExtractionError::UnsafePath(_))));
        assert!(!scratch.path().parent().unwrap().join("escape.txt").exists());
    }

    #[test]
    fn test_expand_corrupt_archive_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let scratch = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.zip");
        fs::write(&path, b"PK\x03\x04 not really a zip").unwrap();

        let result = ArchiveExpander.expand(&path, scratch.path());
        assert!(matches!(result, Err(ExtractionError::Malformed(_))));
    }

    #[test]
    fn test_concurrent_same_stem_expansions_stay_separate() {
        let dir_a = tempfile::tempdir().unwrap();
        let dir_b = tempfile::tempdir().unwrap();
        let scratch = tempfile::tempdir().unwrap();
        let first = write_zip(dir_a.path(), "bundle.zip", &[("a.txt", b"a")]);
        let second = write_zip(dir_b.path(), "bundle.zip", &[("b.txt", b"b")]);

        let scratch_path = scratch.path().to_path_buf();
        let handles = [first, second].map(|archive| {
            let scratch = scratch_path.clone();
            std::thread::spawn(move || ArchiveExpander.expand(&archive, &scratch).unwrap())
        });
        let [root_a, root_b] = handles.map(|h| h.join().unwrap());

        assert_ne!(root_a, root_b);
        // Neither expansion may leak entries into the other's root.
        assert_eq!(fs::read_dir(&root_a).unwrap().count(), 1);
        assert_eq!(fs::read_dir(&root_b).unwrap().count(), 1);
    }

    #[test]
    fn test_colliding_stems_get_distinct_roots() {
        let dir_a = tempfile::tempdir().unwrap();
        let dir_b = tempfile::tempdir().unwrap();
        let scratch = tempfile::tempdir().unwrap();
        let first = write_zip(dir_a.path(), "bundle.zip", &[("a.txt", b"a")]);
        let second = write_zip(dir_b.path(), "bundle.zip", &[("b.txt", b"b")]);

        let root_a = ArchiveExpander.expand(&first, scratch.path()).unwrap();
        let root_b = ArchiveExpander.expand(&second, scratch.path()).unwrap();
        assert_ne!(root_a, root_b);
        assert!(root_a.join("a.txt").exists());
        assert!(root_b.join("b.txt").exists());
    }
}
