//! Scanner types - the per-file record and the in-memory registry.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::classifier::{Category, Classification, Priority, Status};

/// Classification record for one scanned file.
///
/// Immutable once created: re-analysis of the same path replaces the record
/// in the [`Registry`], it never mutates in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    /// Filesystem path, the stable registry key.
    pub path: PathBuf,
    /// Inferred subsystem.
    pub category: Category,
    /// Inferred maintenance priority.
    pub priority: Priority,
    /// Inferred maintenance status.
    pub status: Status,
    /// Raw tokens extracted from import-like lines, in line order.
    /// Duplicates and malformed tokens are possible.
    pub dependencies: Vec<String>,
    /// Modification timestamp read at analysis time, not refreshed after.
    pub last_modified: DateTime<Utc>,
    /// Maintenance flag, computed independently of `status`.
    pub needs_update: bool,
}

impl FileRecord {
    /// Build a record from a path, its classification, and its mtime.
    pub fn new(path: PathBuf, classification: Classification, last_modified: DateTime<Utc>) -> Self {
        Self {
            path,
            category: classification.category,
            priority: classification.priority,
            status: classification.status,
            dependencies: classification.dependencies,
            last_modified,
            needs_update: classification.needs_update,
        }
    }
}

/// In-memory mapping from file path to its classification record.
///
/// Built once per scan pass, consumed by the organizer and the report
/// aggregator, discarded at process end. Every path maps to exactly one
/// record.
#[derive(Debug, Default)]
pub struct Registry {
    records: FxHashMap<PathBuf, FileRecord>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record keyed by its path, replacing any previous record.
    pub fn insert(&mut self, record: FileRecord) -> Option<FileRecord> {
        self.records.insert(record.path.clone(), record)
    }

    pub fn get(&self, path: &Path) -> Option<&FileRecord> {
        self.records.get(path)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records. Iteration order is unspecified; consumers
    /// that need determinism sort on their side.
    pub fn iter(&self) -> impl Iterator<Item = &FileRecord> {
        self.records.values()
    }
}

/// Statistics for one scan pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanStats {
    /// Files successfully analyzed and inserted into the registry.
    pub files_analyzed: usize,
    /// Files skipped because analysis failed (unreadable, bad encoding).
    pub files_skipped: usize,
}
