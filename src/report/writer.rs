//! Report persistence - pretty-printed JSON to a configured path.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::errors::ReportError;
use super::aggregator::Report;

/// Serialize the report and write it to `path`, indented for human
/// readability. Failure is surfaced as a non-fatal error: classification and
/// organization work is already applied to the filesystem, only the
/// persistent record is lost.
pub fn write_report(report: &Report, path: &Path) -> Result<(), ReportError> {
    let json = serde_json::to_string_pretty(report).map_err(|e| ReportError::SerializeFailed {
        message: e.to_string(),
    })?;

    fs::write(path, json).map_err(|e| ReportError::WriteFailed {
        path: path.display().to_string(),
        source: e,
    })?;

    info!("saved report to {}", path.display());
    Ok(())
}
