//! Configuration errors. Always fatal: a run never starts with a bad config.

/// Errors that can occur while loading or validating the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read config {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Invalid config value for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}
