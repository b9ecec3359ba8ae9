//! Integration tests for config file loading and resolution
//!
//! Tests that manipulate XDG_CONFIG_HOME are marked with #[serial]
//! so they run sequentially, not in parallel.

use seoi_common::config::{
    default_config_paths, load_toml_config, ConfigOverrides, ServiceConfig, APP_DIR_NAME,
};
use seoi_common::Error;
use serial_test::serial;
use std::env;
use std::fs;
use std::time::Duration;

#[test]
fn test_explicit_config_file_is_loaded() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
        host = "0.0.0.0"
        port = 7000
        fetch_timeout_secs = 12
        "#,
    )
    .expect("Failed to write config");

    let file = load_toml_config(Some(&path)).unwrap();
    assert!(file.is_some());

    let config = ServiceConfig::resolve(ConfigOverrides::default(), file).unwrap();
    assert_eq!(config.bind_addr(), "0.0.0.0:7000");
    assert_eq!(config.fetch_timeout, Duration::from_secs(12));
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("absent.toml");

    let err = load_toml_config(Some(&path)).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_explicit_invalid_file_is_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "port = [").expect("Failed to write config");

    assert!(matches!(
        load_toml_config(Some(&path)),
        Err(Error::Config(_))
    ));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "port = 6001\ntheme = \"dark\"\n").expect("Failed to write config");

    let file = load_toml_config(Some(&path)).unwrap().unwrap();
    assert_eq!(file.port, Some(6001));
}

#[cfg(target_os = "linux")]
#[test]
#[serial]
fn test_default_location_follows_xdg_config_home() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let app_dir = dir.path().join(APP_DIR_NAME);
    fs::create_dir_all(&app_dir).expect("Failed to create app dir");
    fs::write(app_dir.join("config.toml"), "user_agent = \"FromXdg/1.0\"\n")
        .expect("Failed to write config");

    let previous = env::var_os("XDG_CONFIG_HOME");
    env::set_var("XDG_CONFIG_HOME", dir.path());

    let paths = default_config_paths();
    let file = load_toml_config(None);

    // Cleanup before asserting so a failure does not leak the variable
    match previous {
        Some(value) => env::set_var("XDG_CONFIG_HOME", value),
        None => env::remove_var("XDG_CONFIG_HOME"),
    }

    assert_eq!(paths[0], app_dir.join("config.toml"));
    let file = file.unwrap().expect("config from XDG_CONFIG_HOME");
    assert_eq!(file.user_agent.as_deref(), Some("FromXdg/1.0"));
}

#[cfg(target_os = "linux")]
#[test]
#[serial]
fn test_missing_default_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let previous = env::var_os("XDG_CONFIG_HOME");
    env::set_var("XDG_CONFIG_HOME", dir.path());

    let result = load_toml_config(None);

    match previous {
        Some(value) => env::set_var("XDG_CONFIG_HOME", value),
        None => env::remove_var("XDG_CONFIG_HOME"),
    }

    // /etc/seo-inspector/config.toml is not expected on test machines
    if !std::path::Path::new("/etc/seo-inspector/config.toml").exists() {
        assert!(result.unwrap().is_none());
    }
}
