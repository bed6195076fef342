//! One-invocation orchestration: config, scan, organize, report.
//!
//! The pipeline owns the error policy split: a configuration failure aborts
//! before any scanning, while per-item scan/move/write failures are
//! accumulated in the returned [`PipelineResult`] so callers can inspect
//! partial failure programmatically instead of grepping the log.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::OrganizerConfig;
use crate::errors::{PipelineError, PipelineResult};
use crate::organizer::{OrganizeStats, Organizer};
use crate::report;
use crate::scanner::{RegistryBuilder, ScanStats};

/// Default report destination when neither config nor caller override it.
pub const DEFAULT_REPORT_PATH: &str = "project_report.json";

/// Options for one pipeline run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Root directory to scan (and to relocate files beneath).
    pub root: PathBuf,
    /// JSON configuration document.
    pub config_path: PathBuf,
    /// Report destination override; falls back to the config, then to
    /// [`DEFAULT_REPORT_PATH`].
    pub report_path: Option<PathBuf>,
    /// Whether to physically relocate files after classification.
    pub organize: bool,
}

/// Summary of one completed pipeline run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Registry size, which equals the number of successfully analyzed files.
    pub total_files: usize,
    pub scan_stats: ScanStats,
    /// Present only when the organize stage ran.
    pub organize_stats: Option<OrganizeStats>,
    /// Where the report was written (or attempted).
    pub report_path: PathBuf,
    /// False when report persistence failed; the failure is in `errors`.
    pub report_written: bool,
}

/// Run the full pipeline.
///
/// Returns `Err` only for fatal startup failures (configuration). Everything
/// after that completes with per-item fault isolation, reported through the
/// `PipelineResult` error list.
pub fn run(options: &RunOptions) -> Result<PipelineResult<RunSummary>, PipelineError> {
    let config = OrganizerConfig::load(&options.config_path)?;
    info!(
        "starting run: root={}, organize={}",
        options.root.display(),
        options.organize
    );

    let mut result = PipelineResult::<RunSummary>::default();

    let (registry, scan_stats) =
        result.absorb_errors(RegistryBuilder::new(&options.root, &config.extensions).build());

    let organize_stats = if options.organize {
        let organizer = Organizer::new(&options.root, &config);
        Some(result.absorb_errors(organizer.organize(&registry)))
    } else {
        None
    };

    let report_path = resolve_report_path(options, &config);
    let report = report::aggregate(&registry);
    let report_written = match report::write_report(&report, &report_path) {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("error saving report: {}", e);
            result.add_error(e);
            false
        }
    };

    result.data = RunSummary {
        total_files: registry.len(),
        scan_stats,
        organize_stats,
        report_path,
        report_written,
    };
    Ok(result)
}

fn resolve_report_path(options: &RunOptions, config: &OrganizerConfig) -> PathBuf {
    options
        .report_path
        .clone()
        .or_else(|| config.report_path.clone())
        .unwrap_or_else(|| Path::new(DEFAULT_REPORT_PATH).to_path_buf())
}
