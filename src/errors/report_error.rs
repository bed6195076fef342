//! Report errors. Non-fatal: a lost report leaves filesystem work intact.

/// Errors that can occur while serializing or persisting the report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to serialize report: {message}")]
    SerializeFailed { message: String },

    #[error("Failed to write report to {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
