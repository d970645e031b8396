//! Domain types and validators for poolguard configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::Result;
use poolguard_validation::{CapabilityTable, CloudEnvironment, Feature};
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.poolguard/config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PoolguardConfig {
    /// Cloud used when neither `--cloud` nor the document names one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_cloud: Option<CloudEnvironment>,

    /// Extra or overriding capability registrations, keyed by cloud name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub clouds: BTreeMap<CloudEnvironment, BTreeSet<Feature>>,
}

impl PoolguardConfig {
    /// Built-in capability table with this configuration's registrations
    /// applied on top.
    #[must_use]
    pub fn capability_table(&self) -> CapabilityTable {
        self.clouds
            .iter()
            .fold(CapabilityTable::standard_builder(), |builder, (cloud, features)| {
                builder.register(cloud.clone(), features.iter().copied())
            })
            .build()
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Rejects cloud names that differ from a well-known cloud only by case.
///
/// Such a name would register a brand-new cloud instead of adjusting the
/// well-known one.
///
/// # Errors
///
/// Returns an error naming the first offending cloud.
pub fn validate_config(config: &PoolguardConfig) -> Result<()> {
    let names = config.default_cloud.iter().chain(config.clouds.keys());
    for cloud in names {
        let CloudEnvironment::Other(given) = cloud else {
            continue;
        };
        if let Some(canonical) = CloudEnvironment::known()
            .into_iter()
            .find(|known| known.as_str().eq_ignore_ascii_case(given))
        {
            return Err(ConfigError::CloudNameCase {
                given: given.clone(),
                canonical: canonical.to_string(),
            }
            .into());
        }
    }
    Ok(())
}

/// Pick the cloud to validate against.
///
/// Precedence: command-line flag, then `platform.azure.cloudName` in the
/// document, then `defaultCloud` from configuration, then `AzurePublicCloud`.
#[must_use]
pub fn resolve_cloud(
    flag: Option<&CloudEnvironment>,
    document: Option<&CloudEnvironment>,
    config: &PoolguardConfig,
) -> CloudEnvironment {
    flag.or(document)
        .or(config.default_cloud.as_ref())
        .cloned()
        .unwrap_or_default()
}

// ── Unit tests ───────────────────────────────────────────────────────────────
