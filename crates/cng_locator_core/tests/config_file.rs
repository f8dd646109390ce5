use std::fs;

use cng_locator_core::LocatorError;
use cng_locator_core::config::Config;
use tempfile::tempdir;

#[test]
fn loads_explicit_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "backend_url = \"https://cng.example\"\ndefault_radius_km = 12\ndefault_vehicle = \"chevy_bolt\"\n",
    )
    .unwrap();

    let cfg = Config::from_file(&path).unwrap();
    assert_eq!(cfg.backend_url, "https://cng.example");
    assert_eq!(cfg.default_radius_km, 12);
    assert_eq!(cfg.default_vehicle.as_deref(), Some("chevy_bolt"));
    assert_eq!(cfg.timeout_secs, Config::default().timeout_secs);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempdir().unwrap();
    let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
    assert!(matches!(err, LocatorError::Config(_)));
}

#[test]
fn written_config_reads_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let cfg = Config {
        timeout_secs: 7,
        ..Config::default()
    };
    fs::write(&path, cfg.to_toml().unwrap()).unwrap();
    assert_eq!(Config::from_file(&path).unwrap(), cfg);
}

#[test]
fn invalid_file_values_are_left_for_later_layers() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "timeout_secs = 0\nbackend_url = \"\"\n").unwrap();

    let mut cfg = Config::load(Some(&path)).unwrap();
    assert!(cfg.validate().is_err());

    cfg.timeout_secs = 3;
    cfg.backend_url = "http://localhost:5000".to_string();
    assert!(cfg.validate().is_ok());
}
