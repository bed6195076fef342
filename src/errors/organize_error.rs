//! Organizer errors. Per-item: one failed move never aborts the batch.

/// Errors that can occur while relocating files into the canonical layout.
#[derive(Debug, thiserror::Error)]
pub enum OrganizeError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDirFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to move {from} to {to}: {source}")]
    MoveFailed {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },
}
