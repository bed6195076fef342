//! Scan errors. Per-item: a failed file is logged and skipped, never fatal.

/// Errors that can occur while analyzing a single file during the scan.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to stat {path}: {source}")]
    MetadataFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Walk error: {message}")]
    WalkFailed { message: String },
}
