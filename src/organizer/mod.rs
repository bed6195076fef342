//! File relocation into the canonical directory layout.
//!
//! Consumes the registry and the category-to-directory mapping, moving each
//! mapped file under its category's target directory. Destructive: an
//! existing file at the destination is silently overwritten, and there is no
//! dry-run or undo. Per-file failures are isolated so one bad move never
//! corrupts the rest of the batch.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::classifier::Category;
use crate::config::OrganizerConfig;
use crate::errors::{OrganizeError, PipelineResult};
use crate::scanner::Registry;

/// Statistics for one organize pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrganizeStats {
    /// Files moved into a target directory.
    pub files_moved: usize,
    /// Files left in place because their category has no mapping.
    pub files_unmapped: usize,
}

/// Plans and executes file relocation for one scan pass.
pub struct Organizer {
    root: PathBuf,
    directories: BTreeMap<Category, PathBuf>,
}

impl Organizer {
    pub fn new(root: impl Into<PathBuf>, config: &OrganizerConfig) -> Self {
        Self {
            root: root.into(),
            directories: config.directories.clone(),
        }
    }

    /// Relocate every registry record whose category has a target directory.
    ///
    /// Records with an unmapped category (notably `misc`) are left untouched.
    /// Each failed move is logged and collected as a non-fatal error; the
    /// batch continues. Moves run in sorted path order for determinism.
    pub fn organize(&self, registry: &Registry) -> PipelineResult<OrganizeStats> {
        let mut result = PipelineResult::default();
        let mut stats = OrganizeStats::default();

        let mut records: Vec<_> = registry.iter().collect();
        records.sort_by(|a, b| a.path.cmp(&b.path));

        for record in records {
            let Some(relative_dir) = self.directories.get(&record.category) else {
                stats.files_unmapped += 1;
                continue;
            };
            let target_dir = self.root.join(relative_dir);

            let moved = self
                .ensure_directory(&target_dir)
                .and_then(|()| move_file(&record.path, &target_dir));

            match moved {
                Ok(destination) => {
                    info!(
                        "moved {} to {}",
                        record.path.display(),
                        destination.display()
                    );
                    stats.files_moved += 1;
                }
                Err(e) => {
                    error!("error moving {}: {}", record.path.display(), e);
                    result.add_error(e);
                }
            }
        }

        result.data = stats;
        result
    }

    /// Create the target directory if absent. Idempotent: an existing
    /// directory is not an error.
    fn ensure_directory(&self, dir: &Path) -> Result<(), OrganizeError> {
        if dir.exists() {
            return Ok(());
        }
        fs::create_dir_all(dir).map_err(|e| OrganizeError::CreateDirFailed {
            path: dir.display().to_string(),
            source: e,
        })?;
        info!("created directory {}", dir.display());
        Ok(())
    }
}

/// Move `source` into `target_dir`, keeping its base filename and silently
/// overwriting any existing destination. Falls back to copy + remove when a
/// plain rename fails (cross-device moves).
fn move_file(source: &Path, target_dir: &Path) -> Result<PathBuf, OrganizeError> {
    let move_err = |e: std::io::Error| OrganizeError::MoveFailed {
        from: source.display().to_string(),
        to: target_dir.display().to_string(),
        source: e,
    };

    let filename = source
        .file_name()
        .ok_or_else(|| move_err(std::io::Error::other("source has no filename")))?;
    let destination = target_dir.join(filename);

    if fs::rename(source, &destination).is_err() {
        fs::copy(source, &destination).map_err(move_err)?;
        fs::remove_file(source).map_err(move_err)?;
    }
    Ok(destination)
}
