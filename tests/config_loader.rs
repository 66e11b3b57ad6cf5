use datadeck::catalog::Resource;
use datadeck::config::{Config, ConfigError};
use datadeck::query::PageSize;
use std::fs;
use tempfile::tempdir;

fn write_config(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    (dir, path)
}

#[test]
fn full_config_parses() {
    let (_dir, path) = write_config(
        r#"
[api]
base_url = "https://api.example.test"

[ui]
page_size = 20
start_resource = "products"

[logging]
file = "/tmp/datadeck.log"
filter = "datadeck=debug"
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.api.base_url, "https://api.example.test");
    assert_eq!(config.ui.page_size, PageSize::Twenty);
    assert_eq!(config.start_resource(), Resource::Products);
    assert_eq!(config.logging.filter, "datadeck=debug");
}

#[test]
fn empty_file_yields_defaults() {
    let (_dir, path) = write_config("");

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.api.base_url, "https://dummyjson.com");
    assert_eq!(config.ui.page_size, PageSize::Five);
    assert_eq!(config.start_resource(), Resource::Users);
    assert_eq!(config.logging.file, None);
}

#[test]
fn unknown_page_size_is_a_parse_error() {
    let (_dir, path) = write_config("[ui]\npage_size = 7\n");

    let err = Config::load_from(&path).unwrap_err();

    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn empty_base_url_fails_validation() {
    let (_dir, path) = write_config("[api]\nbase_url = \"\"\n");

    let err = Config::load_from(&path).unwrap_err();

    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn non_http_base_url_fails_validation() {
    let (_dir, path) = write_config("[api]\nbase_url = \"ftp://example.test\"\n");

    let err = Config::load_from(&path).unwrap_err();

    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn unknown_start_resource_fails_validation() {
    let (_dir, path) = write_config("[ui]\nstart_resource = \"carts\"\n");

    let err = Config::load_from(&path).unwrap_err();

    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.toml");

    let err = Config::load_from(&path).unwrap_err();

    assert!(matches!(err, ConfigError::ReadError { .. }));
}
