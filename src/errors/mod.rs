//! Error handling for the organizer.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! The split encodes the error policy: `ConfigError` is fatal and aborts the
//! run before any scanning; `ScanError`, `OrganizeError`, and `ReportError`
//! are per-item and are accumulated in a [`PipelineResult`] instead of
//! aborting the batch.

pub mod config_error;
pub mod organize_error;
pub mod pipeline_error;
pub mod report_error;
pub mod scan_error;

pub use config_error::ConfigError;
pub use organize_error::OrganizeError;
pub use pipeline_error::{PipelineError, PipelineResult};
pub use report_error::ReportError;
pub use scan_error::ScanError;
