//! Tests for the JSON configuration loader and its fatal error policy.

use std::fs;

use project_organizer::classifier::Category;
use project_organizer::config::OrganizerConfig;
use project_organizer::errors::ConfigError;

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

#[test]
fn test_load_valid_config() {
    let dir = tempdir();
    let path = dir.path().join("organizer.json");
    fs::write(
        &path,
        r#"{
            "extensions": [".php"],
            "directories": {
                "security": "Core/Security",
                "infrastructure": "Infra"
            },
            "report_path": "out/report.json"
        }"#,
    )
    .unwrap();

    let config = OrganizerConfig::load(&path).unwrap();
    assert_eq!(config.extensions, vec![".php"]);
    assert_eq!(
        config.directories.get(&Category::Infrastructure).unwrap(),
        std::path::Path::new("Infra")
    );
    assert_eq!(
        config.report_path.as_deref(),
        Some(std::path::Path::new("out/report.json"))
    );
}

#[test]
fn test_missing_file_is_fatal() {
    let dir = tempdir();
    let err = OrganizerConfig::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn test_malformed_json_is_fatal() {
    let dir = tempdir();
    let path = dir.path().join("organizer.json");
    fs::write(&path, "{ not valid json").unwrap();

    let err = OrganizerConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_unknown_keys_ignored() {
    let dir = tempdir();
    let path = dir.path().join("organizer.json");
    fs::write(&path, r#"{ "future_setting": true }"#).unwrap();

    // Defaults apply for everything the document does not set.
    let config = OrganizerConfig::load(&path).unwrap();
    assert_eq!(config.extensions, vec![".php"]);
    assert_eq!(config.directories.len(), 4);
}
