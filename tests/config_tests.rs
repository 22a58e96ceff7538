use std::fs;

use swarmscope::config::merge::{DEFAULT_REFRESH_MS, DEFAULT_RESPONSE_TIME_MS};
use swarmscope::config::{load_toml_file, OutputFormat, PartialConfig};
use swarmscope::error::ConfigError;
use tempfile::TempDir;

fn setup_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

#[test]
fn missing_file_is_none() {
    let dir = setup_dir();
    let loaded = load_toml_file(&dir.path().join("swarmscope.toml")).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn full_file_maps_every_section() {
    let dir = setup_dir();
    let path = dir.path().join("swarmscope.toml");
    fs::write(
        &path,
        r#"
[display]
format = "json"

[watch]
refresh_ms = 1000

[health]
assumed_response_time_ms = 420

[logging]
log_file = "swarmscope.log"
"#,
    )
    .unwrap();

    let config = load_toml_file(&path).unwrap().unwrap().finalize();
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.refresh_ms, 1000);
    assert_eq!(config.assumed_response_time_ms, 420);
    assert_eq!(
        config.log_file.as_deref(),
        Some(std::path::Path::new("swarmscope.log"))
    );
}

#[test]
fn partial_file_leaves_defaults() {
    let dir = setup_dir();
    let path = dir.path().join("swarmscope.toml");
    fs::write(&path, "[watch]\nrefresh_ms = 250\n").unwrap();

    let config = load_toml_file(&path).unwrap().unwrap().finalize();
    assert_eq!(config.refresh_ms, 250);
    assert_eq!(config.format, OutputFormat::Text);
    assert_eq!(config.assumed_response_time_ms, DEFAULT_RESPONSE_TIME_MS);
}

#[test]
fn invalid_toml_is_parse_error() {
    let dir = setup_dir();
    let path = dir.path().join("swarmscope.toml");
    fs::write(&path, "[display]\nformat = \"yaml\"\n").unwrap();

    let err = load_toml_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("swarmscope.toml"));
}

#[test]
fn cli_layer_beats_file_layer() {
    let dir = setup_dir();
    let path = dir.path().join("swarmscope.toml");
    fs::write(&path, "[display]\nformat = \"json\"\n[watch]\nrefresh_ms = 900\n").unwrap();
    let file = load_toml_file(&path).unwrap().unwrap();

    let cli = PartialConfig {
        format: Some(OutputFormat::Text),
        ..Default::default()
    };
    let config = cli.with_fallback(file).finalize();
    assert_eq!(config.format, OutputFormat::Text);
    assert_eq!(config.refresh_ms, 900);
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = PartialConfig::default().finalize();
    assert_eq!(config.refresh_ms, DEFAULT_REFRESH_MS);
}
