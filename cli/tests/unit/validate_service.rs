//! Tests for the validate use-case with mocked configuration and documents.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::collections::BTreeSet;

use poolguard_cli::application::services::validate_service::{load_capabilities, validate_file};
use poolguard_cli::domain::config::PoolguardConfig;
use poolguard_cli::domain::error::ConfigError;
use poolguard_validation::{CapabilityTable, CloudEnvironment, Feature};

use crate::mocks::{
    BrokenConfig, ENCRYPTED_POOLS, FixedConfig, InlineDocument, MALFORMED_SET, STACK_DOCUMENT,
    YamlConfig, doc_path,
};

fn paths(report: &poolguard_cli::domain::ValidationReport) -> Vec<String> {
    report.errors.iter().map(|e| e.path.to_string()).collect()
}

#[test]
fn test_document_without_cloud_defaults_to_public() {
    let report = validate_file(
        &FixedConfig(PoolguardConfig::default()),
        &InlineDocument(ENCRYPTED_POOLS),
        &doc_path(),
        None,
    )
    .expect("validation runs");
    assert_eq!(report.cloud, CloudEnvironment::AzurePublicCloud);
    assert!(report.registered);
    assert!(report.valid, "got: {:?}", report.errors);
    assert_eq!(report.pools, 2);
}

#[test]
fn test_cloud_flag_overrides_document() {
    let report = validate_file(
        &FixedConfig(PoolguardConfig::default()),
        &InlineDocument(STACK_DOCUMENT),
        &doc_path(),
        Some(&CloudEnvironment::AzurePublicCloud),
    )
    .expect("validation runs");
    assert_eq!(report.cloud, CloudEnvironment::AzurePublicCloud);
    assert!(report.valid);
}

#[test]
fn test_document_cloud_name_is_used() {
    let report = validate_file(
        &FixedConfig(PoolguardConfig::default()),
        &InlineDocument(STACK_DOCUMENT),
        &doc_path(),
        None,
    )
    .expect("validation runs");
    assert_eq!(report.cloud, CloudEnvironment::AzureStackCloud);
    assert_eq!(paths(&report), ["compute[0].platform.azure.encryptionAtHost"]);
}

#[test]
fn test_config_default_cloud_applies_when_document_is_silent() {
    let config = PoolguardConfig {
        default_cloud: Some(CloudEnvironment::AzureStackCloud),
        ..PoolguardConfig::default()
    };
    let report = validate_file(
        &FixedConfig(config),
        &InlineDocument(ENCRYPTED_POOLS),
        &doc_path(),
        None,
    )
    .expect("validation runs");
    assert_eq!(
        paths(&report),
        [
            "controlPlane.platform.azure.encryptionAtHost",
            "compute[0].platform.azure.osDisk.diskEncryptionSet.diskEncryptionSet",
        ]
    );
}

#[test]
fn test_unregistered_cloud_fails_closed_and_is_flagged() {
    let report = validate_file(
        &FixedConfig(PoolguardConfig::default()),
        &InlineDocument(ENCRYPTED_POOLS),
        &doc_path(),
        Some(&CloudEnvironment::Other("AzureMoonCloud".to_string())),
    )
    .expect("validation runs");
    assert!(!report.registered);
    assert_eq!(report.errors.len(), 2);
}

#[test]
fn test_configured_cloud_registration_is_honoured() {
    let report = validate_file(
        &YamlConfig("clouds:\n  AzureMoonCloud: [encryptionAtHost, diskEncryptionSets]\n"),
        &InlineDocument(ENCRYPTED_POOLS),
        &doc_path(),
        Some(&CloudEnvironment::Other("AzureMoonCloud".to_string())),
    )
    .expect("validation runs");
    assert!(report.registered);
    assert!(report.valid);
}

#[test]
fn test_malformed_set_reports_each_field() {
    let report = validate_file(
        &FixedConfig(PoolguardConfig::default()),
        &InlineDocument(MALFORMED_SET),
        &doc_path(),
        None,
    )
    .expect("validation runs");
    let details: Vec<&str> = report.errors.iter().map(|e| e.detail.as_str()).collect();
    assert_eq!(
        details,
        [
            "invalid subscription ID format",
            "invalid resource group format",
            "invalid name format",
        ]
    );
}

#[test]
fn test_miscased_config_cloud_is_rejected() {
    let err = validate_file(
        &YamlConfig("clouds:\n  azurestackcloud: [encryptionAtHost]\n"),
        &InlineDocument(ENCRYPTED_POOLS),
        &doc_path(),
        None,
    )
    .unwrap_err();
    assert!(err.downcast_ref::<ConfigError>().is_some(), "got: {err}");
}

#[test]
fn test_config_store_failure_propagates() {
    let err = validate_file(&BrokenConfig, &InlineDocument(ENCRYPTED_POOLS), &doc_path(), None)
        .unwrap_err();
    assert!(err.to_string().contains("config store unavailable"));
}

#[test]
fn test_load_capabilities_applies_config() {
    let mut config = PoolguardConfig::default();
    config.clouds.insert(
        CloudEnvironment::AzureStackCloud,
        BTreeSet::from([Feature::EncryptionAtHost]),
    );
    let table = load_capabilities(&FixedConfig(config)).expect("loads");
    assert!(table.supports(&CloudEnvironment::AzureStackCloud, Feature::EncryptionAtHost));
    assert_ne!(table, CapabilityTable::standard());
}
