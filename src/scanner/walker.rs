//! Sequential file walker building the registry.
//!
//! Walks the tree in sorted entry order so runs are deterministic, classifies
//! every file matching the extension filter, and records per-file failures as
//! non-fatal errors instead of aborting the scan.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{error, info};
use walkdir::WalkDir;

use crate::classifier;
use crate::errors::{PipelineResult, ScanError};
use super::types::{FileRecord, Registry, ScanStats};

/// Builds a [`Registry`] by scanning a directory tree.
pub struct RegistryBuilder {
    root: PathBuf,
    extensions: Vec<String>,
}

impl RegistryBuilder {
    /// Create a builder for the given root and extension filter.
    /// Extensions carry their leading dot, e.g. `".php"`.
    pub fn new(root: impl Into<PathBuf>, extensions: &[String]) -> Self {
        Self {
            root: root.into(),
            extensions: extensions.to_vec(),
        }
    }

    /// Walk the tree and classify every matching file.
    ///
    /// A file that fails to read or stat is logged, counted as skipped, and
    /// collected as a non-fatal error; the scan continues with the next
    /// entry. Skipped files are simply absent from the registry, which
    /// changes report totals.
    pub fn build(&self) -> PipelineResult<(Registry, ScanStats)> {
        let mut result = PipelineResult::default();
        let mut registry = Registry::new();
        let mut stats = ScanStats::default();

        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    error!("walk error under {}: {}", self.root.display(), e);
                    result.add_error(ScanError::WalkFailed {
                        message: e.to_string(),
                    });
                    continue;
                }
            };

            if !entry.file_type().is_file() || !self.matches_extension(entry.path()) {
                continue;
            }

            match self.analyze_file(entry.path()) {
                Ok(record) => {
                    info!(
                        "analyzed {} - category: {} - priority: {}",
                        record.path.display(),
                        record.category,
                        record.priority
                    );
                    registry.insert(record);
                    stats.files_analyzed += 1;
                }
                Err(e) => {
                    error!("error analyzing {}: {}", entry.path().display(), e);
                    stats.files_skipped += 1;
                    result.add_error(e);
                }
            }
        }

        info!(
            "scan complete: {} analyzed, {} skipped",
            stats.files_analyzed, stats.files_skipped
        );
        result.data = (registry, stats);
        result
    }

    /// Classify a single file and attach its filesystem metadata.
    fn analyze_file(&self, path: &Path) -> Result<FileRecord, ScanError> {
        let content = fs::read_to_string(path).map_err(|e| ScanError::ReadFailed {
            path: path.display().to_string(),
            source: e,
        })?;

        let modified = fs::metadata(path)
            .and_then(|m| m.modified())
            .map_err(|e| ScanError::MetadataFailed {
                path: path.display().to_string(),
                source: e,
            })?;

        let classification = classifier::classify(&content);
        Ok(FileRecord::new(
            path.to_path_buf(),
            classification,
            DateTime::<Utc>::from(modified),
        ))
    }

    /// Filename-suffix match against the configured extensions.
    fn matches_extension(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_extension() {
        let builder = RegistryBuilder::new(".", &[".php".to_string()]);
        assert!(builder.matches_extension(Path::new("a/b/index.php")));
        assert!(!builder.matches_extension(Path::new("a/b/index.phps")));
        assert!(!builder.matches_extension(Path::new("a/b/notes.txt")));
    }
}
