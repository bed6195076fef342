//! Pipeline errors and non-fatal error collection.

use super::{ConfigError, OrganizeError, ReportError, ScanError};

/// Errors that can occur during a pipeline run.
/// Aggregates subsystem errors via `From` conversions.
///
/// Only the `Config` variant is fatal; the others are collected per item in
/// a [`PipelineResult`] so a single bad file never aborts the whole tree.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Organize error: {0}")]
    Organize(#[from] OrganizeError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

/// Result of a pipeline stage that accumulates non-fatal errors.
/// Allows partial results to be returned even when some files fail.
#[derive(Debug, Default)]
pub struct PipelineResult<T: Default = ()> {
    /// The successful result data.
    pub data: T,
    /// Non-fatal errors collected during the run.
    pub errors: Vec<PipelineError>,
}

impl<T: Default> PipelineResult<T> {
    /// Create a new result with no errors.
    pub fn new(data: T) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    /// Add a non-fatal error to the result.
    pub fn add_error(&mut self, error: impl Into<PipelineError>) {
        self.errors.push(error.into());
    }

    /// Fold another stage's errors into this result.
    pub fn absorb_errors<U: Default>(&mut self, other: PipelineResult<U>) -> U {
        self.errors.extend(other.errors);
        other.data
    }

    /// Returns true if there are no non-fatal errors.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of non-fatal errors.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
