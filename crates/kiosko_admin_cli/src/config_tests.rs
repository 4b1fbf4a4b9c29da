//! Unit tests for configuration loading.

use std::path::PathBuf;

use temp_dir::TempDir;

use super::AppConfig;
use crate::errors::Error;

#[test]
fn loads_a_complete_configuration_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("kiosko.toml");
    std::fs::write(
        &path,
        r#"
api_base_url = "https://admin-api.kiosko.example"
storage_path = "/var/lib/kiosko/session.json"
"#,
    )
    .expect("write fixture");

    let config = AppConfig::load(&path).expect("load succeeds");

    assert_eq!(config.api_base_url, "https://admin-api.kiosko.example");
    assert_eq!(
        config.storage_path,
        PathBuf::from("/var/lib/kiosko/session.json")
    );
}

#[test]
fn storage_path_defaults_when_omitted() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("kiosko.toml");
    std::fs::write(&path, "api_base_url = \"https://admin-api.kiosko.example\"\n")
        .expect("write fixture");

    let config = AppConfig::load(&path).expect("load succeeds");
    assert_eq!(config.storage_path, PathBuf::from(".kiosko/session.json"));
}

#[test]
fn missing_file_is_a_configuration_error() {
    let dir = TempDir::new().expect("temp dir");
    let result = AppConfig::load(&dir.path().join("absent.toml"));

    match result {
        Err(Error::Config(message)) => assert!(message.contains("not found")),
        other => panic!("expected Config error, got {other:?}"),
    }
}

#[test]
fn invalid_toml_is_a_configuration_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("kiosko.toml");
    std::fs::write(&path, "api_base_url = [unclosed").expect("write fixture");

    assert!(matches!(AppConfig::load(&path), Err(Error::Config(_))));
}
