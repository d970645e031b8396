//! Tests for the YAML-backed `ConfigStore`.
//!
//! These tests mutate the `POOLGUARD_CONFIG` env var and are serialized with
//! `serial_test` to avoid races.

#![allow(clippy::expect_used, clippy::unwrap_used, unsafe_code)]

use poolguard_cli::application::ports::ConfigStore;
use poolguard_cli::domain::error::ConfigError;
use poolguard_cli::infra::config::{CONFIG_ENV, YamlConfigStore};
use poolguard_validation::{CloudEnvironment, Feature};
use serial_test::serial;
use tempfile::TempDir;

fn point_config_at(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("config.yaml");
    // SAFETY: every test touching POOLGUARD_CONFIG is #[serial].
    unsafe { std::env::set_var(CONFIG_ENV, &path) };
    path
}

#[test]
#[serial]
fn test_path_honours_env_override() {
    let dir = TempDir::new().expect("temp dir");
    let path = point_config_at(&dir);
    assert_eq!(YamlConfigStore.path().expect("path"), path);
}

#[test]
#[serial]
fn test_missing_file_loads_defaults() {
    let dir = TempDir::new().expect("temp dir");
    point_config_at(&dir);
    let config = YamlConfigStore.load().expect("defaults");
    assert!(config.default_cloud.is_none());
    assert!(config.clouds.is_empty());
}

#[test]
#[serial]
fn test_valid_file_is_parsed() {
    let dir = TempDir::new().expect("temp dir");
    let path = point_config_at(&dir);
    std::fs::write(
        &path,
        "defaultCloud: AzureStackCloud\nclouds:\n  PrivateCloud: [diskEncryptionSets]\n",
    )
    .expect("write");
    let config = YamlConfigStore.load().expect("parsed");
    assert_eq!(config.default_cloud, Some(CloudEnvironment::AzureStackCloud));
    let features = config
        .clouds
        .get(&CloudEnvironment::Other("PrivateCloud".to_string()))
        .expect("registered");
    assert!(features.contains(&Feature::DiskEncryptionSets));
}

#[test]
#[serial]
fn test_malformed_file_is_typed_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = point_config_at(&dir);
    std::fs::write(&path, "clouds: [not, a, map]\n").expect("write");
    let err = YamlConfigStore.load().unwrap_err();
    let config_err = err.downcast_ref::<ConfigError>().expect("ConfigError");
    assert_eq!(config_err.code(), "CONFIG_MALFORMED");
}
