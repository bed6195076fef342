//! Organizer configuration loaded from a JSON document.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::classifier::Category;
use crate::errors::ConfigError;

/// Settings for one organizer invocation.
///
/// Loaded from a JSON file once at startup. A missing, unreadable, or
/// malformed file is a fatal error: the run never starts with a bad config.
/// Unknown keys are silently ignored (forward-compatible).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizerConfig {
    /// Filename suffixes to scan, leading dot included.
    pub extensions: Vec<String>,
    /// Category to target-directory mapping, relative to the scan root.
    /// Categories absent from the map (notably `misc`) are never relocated.
    pub directories: BTreeMap<Category, PathBuf>,
    /// Report destination override. Relative paths resolve against the
    /// working directory.
    pub report_path: Option<PathBuf>,
}

impl Default for OrganizerConfig {
    fn default() -> Self {
        let mut directories = BTreeMap::new();
        directories.insert(Category::Security, PathBuf::from("Core/Security"));
        directories.insert(Category::Content, PathBuf::from("Core/Content"));
        directories.insert(Category::Template, PathBuf::from("Core/Template"));
        directories.insert(Category::Infrastructure, PathBuf::from("Infrastructure"));

        Self {
            extensions: vec![".php".to_string()],
            directories,
            report_path: None,
        }
    }
}

impl OrganizerConfig {
    /// Load and validate configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source: e,
        })?;

        let config: Self =
            serde_json::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a JSON string (for testing).
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extensions.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "extensions".to_string(),
                message: "must list at least one extension".to_string(),
            });
        }
        for ext in &self.extensions {
            if !ext.starts_with('.') || ext.len() < 2 {
                return Err(ConfigError::ValidationFailed {
                    field: "extensions".to_string(),
                    message: format!("\"{ext}\" must start with a dot"),
                });
            }
        }
        for (category, dir) in &self.directories {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("directories.{category}"),
                    message: "target directory must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OrganizerConfig::default();
        assert_eq!(config.extensions, vec![".php"]);
        assert_eq!(
            config.directories.get(&Category::Security),
            Some(&PathBuf::from("Core/Security"))
        );
        assert!(!config.directories.contains_key(&Category::Misc));
    }

    #[test]
    fn test_from_json_overrides() {
        let config = OrganizerConfig::from_json(
            r#"{ "extensions": [".php", ".inc"], "directories": { "security": "Secure" } }"#,
        )
        .unwrap();
        assert_eq!(config.extensions.len(), 2);
        assert_eq!(
            config.directories.get(&Category::Security),
            Some(&PathBuf::from("Secure"))
        );
    }

    #[test]
    fn test_invalid_extension_rejected() {
        let err = OrganizerConfig::from_json(r#"{ "extensions": ["php"] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationFailed { .. }));
    }
}
