use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use codex_app::{AppConfig, ConfigError, LogDestination};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn missing_file_is_not_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("codex.ron");

    assert!(AppConfig::try_load(&path).unwrap().is_none());
    assert_eq!(AppConfig::load_or_default(&path), AppConfig::default());
}

#[test]
fn partial_file_keeps_defaults_for_the_rest() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("codex.ron");
    fs::write(
        &path,
        r#"(
            base_url: "https://comics.example.com/api/v3",
            request_timeout_secs: Some(20),
            log_destination: Both,
        )"#,
    )
    .unwrap();

    let config = AppConfig::try_load(&path).unwrap().expect("config");
    assert_eq!(config.base_url, "https://comics.example.com/api/v3");
    assert_eq!(config.download_dir, PathBuf::from("downloads"));
    assert_eq!(config.log_destination, LogDestination::Both);

    let settings = config.transport_settings();
    assert_eq!(settings.request_timeout, Some(Duration::from_secs(20)));
    assert_eq!(settings.connect_timeout, None);
}

#[test]
fn invalid_file_reports_parse_error_and_falls_back() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("codex.ron");
    fs::write(&path, "(base_url: 42").unwrap();

    assert!(matches!(
        AppConfig::try_load(&path),
        Err(ConfigError::Parse { .. })
    ));
    assert_eq!(AppConfig::load_or_default(&path), AppConfig::default());

    let (config, err) = AppConfig::resolve(&path);
    assert_eq!(config, AppConfig::default());
    assert!(matches!(err, Some(ConfigError::Parse { .. })));
}

#[test]
fn resolve_of_missing_file_has_no_error() {
    let temp = TempDir::new().unwrap();
    let (config, err) = AppConfig::resolve(&temp.path().join("absent.ron"));
    assert_eq!(config, AppConfig::default());
    assert!(err.is_none());
}

#[test]
fn default_transport_waits_indefinitely() {
    let settings = AppConfig::default().transport_settings();
    assert_eq!(settings.connect_timeout, None);
    assert_eq!(settings.request_timeout, None);
}
