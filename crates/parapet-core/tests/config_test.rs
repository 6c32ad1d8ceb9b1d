//! Configuration loading tests.

use std::fs;

use parapet_core::config::ParapetConfig;
use parapet_core::errors::ConfigError;
use tempfile::TempDir;

#[test]
fn loads_scan_section_from_toml() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("parapet.toml");
    fs::write(
        &path,
        r#"
[scan]
concurrency = 4
exclude = ["generated/**"]
ignored_rules = ["net-insecure-http"]
cache = false
"#,
    )
    .expect("write config");

    let config = ParapetConfig::from_file(&path).expect("load config");
    assert_eq!(config.scan.effective_concurrency(), 4);
    assert_eq!(config.scan.exclude, vec!["generated/**".to_string()]);
    assert_eq!(
        config.scan.ignored_rules,
        vec!["net-insecure-http".to_string()]
    );
    assert!(!config.scan.effective_cache());
}

#[test]
fn empty_file_yields_defaults() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("parapet.toml");
    fs::write(&path, "").expect("write config");

    let config = ParapetConfig::from_file(&path).expect("load config");
    assert_eq!(config.scan.effective_concurrency(), 10);
    assert!(config.scan.effective_cache());
    assert!(config.scan.exclude.is_empty());
}

#[test]
fn invalid_toml_is_a_toml_error() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("parapet.toml");
    fs::write(&path, "[scan\nconcurrency = ").expect("write config");

    match ParapetConfig::from_file(&path) {
        Err(ConfigError::Toml { .. }) => {}
        other => panic!("expected Toml error, got {other:?}"),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("does-not-exist.toml");

    match ParapetConfig::from_file(&path) {
        Err(ConfigError::Io { .. }) => {}
        other => panic!("expected Io error, got {other:?}"),
    }
}
