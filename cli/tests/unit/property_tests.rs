//! Property-based tests for cloud resolution and configuration handling.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used)]

use proptest::prelude::*;

use poolguard_cli::domain::config::{PoolguardConfig, resolve_cloud, validate_config};
use poolguard_validation::{CloudEnvironment, Feature};

fn cloud() -> impl Strategy<Value = CloudEnvironment> {
    "[A-Za-z][A-Za-z0-9]{0,24}".prop_map(|s| s.parse().expect("non-empty"))
}

proptest! {
    /// An explicit flag always wins.
    #[test]
    fn prop_flag_always_wins(
        flag in cloud(),
        doc in proptest::option::of(cloud()),
        default in proptest::option::of(cloud()),
    ) {
        let config = PoolguardConfig { default_cloud: default, ..PoolguardConfig::default() };
        prop_assert_eq!(resolve_cloud(Some(&flag), doc.as_ref(), &config), flag);
    }

    /// Without a flag, the document's cloud wins over configuration.
    #[test]
    fn prop_document_beats_config(doc in cloud(), default in proptest::option::of(cloud())) {
        let config = PoolguardConfig { default_cloud: default, ..PoolguardConfig::default() };
        prop_assert_eq!(resolve_cloud(None, Some(&doc), &config), doc);
    }

    /// A configured cloud that is not a miscased well-known name is accepted,
    /// and its registration is exactly what the table reports.
    #[test]
    fn prop_registered_cloud_matches_table(
        name in "[a-z]{1,8}Private[a-z]{0,8}",
        host in any::<bool>(),
        disk in any::<bool>(),
    ) {
        let cloud = CloudEnvironment::Other(name);
        let mut features = std::collections::BTreeSet::new();
        if host { features.insert(Feature::EncryptionAtHost); }
        if disk { features.insert(Feature::DiskEncryptionSets); }
        let mut config = PoolguardConfig::default();
        config.clouds.insert(cloud.clone(), features);
        prop_assert!(validate_config(&config).is_ok());
        let table = config.capability_table();
        prop_assert_eq!(table.supports(&cloud, Feature::EncryptionAtHost), host);
        prop_assert_eq!(table.supports(&cloud, Feature::DiskEncryptionSets), disk);
    }
}

#[test]
fn test_every_miscased_known_cloud_is_rejected() {
    for known in CloudEnvironment::known() {
        let mut config = PoolguardConfig::default();
        config.clouds.insert(
            CloudEnvironment::Other(known.as_str().to_lowercase()),
            std::collections::BTreeSet::new(),
        );
        assert!(validate_config(&config).is_err(), "accepted: {known}");
    }
}
