//! Cloud environment variants and the capability table.
//!
//! The table is the only place that knows which cloud supports which
//! optional feature. Validators receive it by reference; there is no global
//! state. A cloud that was never registered supports nothing.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseCloudError;

// ── CloudEnvironment ─────────────────────────────────────────────────────────

/// Target Azure cloud.
///
/// Names that are not one of the well-known clouds parse into
/// [`CloudEnvironment::Other`] so that new or private clouds can still be
/// expressed (and registered in a [`CapabilityTable`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CloudEnvironment {
    #[default]
    AzurePublicCloud,
    AzureUSGovernmentCloud,
    AzureChinaCloud,
    AzureGermanCloud,
    /// Azure Stack Hub, the disconnected/on-premises variant.
    AzureStackCloud,
    /// A cloud outside the well-known set. Build it with
    /// [`CloudEnvironment::named`] or `FromStr`, which map well-known names to
    /// their own variants; a hand-built `Other("AzurePublicCloud")` is still
    /// resolved to the well-known cloud by [`CapabilityTable`] lookups.
    Other(String),
}

impl CloudEnvironment {
    /// The well-known clouds, in declaration order.
    #[must_use]
    pub fn known() -> [CloudEnvironment; 5] {
        [
            Self::AzurePublicCloud,
            Self::AzureUSGovernmentCloud,
            Self::AzureChinaCloud,
            Self::AzureGermanCloud,
            Self::AzureStackCloud,
        ]
    }

    /// The cloud called exactly `name`: a well-known variant when the name
    /// matches one, otherwise [`CloudEnvironment::Other`].
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self::known()
            .into_iter()
            .find(|c| c.as_str() == name)
            .unwrap_or_else(|| Self::Other(name.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::AzurePublicCloud => "AzurePublicCloud",
            Self::AzureUSGovernmentCloud => "AzureUSGovernmentCloud",
            Self::AzureChinaCloud => "AzureChinaCloud",
            Self::AzureGermanCloud => "AzureGermanCloud",
            Self::AzureStackCloud => "AzureStackCloud",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for CloudEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CloudEnvironment {
    type Err = ParseCloudError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() {
            return Err(ParseCloudError::Empty);
        }
        Ok(Self::named(name))
    }
}

impl TryFrom<String> for CloudEnvironment {
    type Error = ParseCloudError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CloudEnvironment> for String {
    fn from(value: CloudEnvironment) -> Self {
        match value {
            CloudEnvironment::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

// ── Feature ──────────────────────────────────────────────────────────────────

/// Optional platform feature that a machine pool may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Feature {
    DiskEncryptionSets,
    EncryptionAtHost,
}

impl Feature {
    pub const ALL: [Feature; 2] = [Feature::DiskEncryptionSets, Feature::EncryptionAtHost];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DiskEncryptionSets => "diskEncryptionSets",
            Self::EncryptionAtHost => "encryptionAtHost",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── CapabilityTable ──────────────────────────────────────────────────────────

/// Immutable lookup from cloud to the optional features it supports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilityTable {
    entries: BTreeMap<CloudEnvironment, BTreeSet<Feature>>,
}

impl CapabilityTable {
    /// The built-in registrations: every public and sovereign cloud supports
    /// all features, Azure Stack supports none.
    #[must_use]
    pub fn standard() -> Self {
        Self::standard_builder().build()
    }

    /// A builder seeded with the built-in registrations.
    #[must_use]
    pub fn standard_builder() -> CapabilityTableBuilder {
        Self::builder()
            .register(CloudEnvironment::AzurePublicCloud, Feature::ALL)
            .register(CloudEnvironment::AzureUSGovernmentCloud, Feature::ALL)
            .register(CloudEnvironment::AzureChinaCloud, Feature::ALL)
            .register(CloudEnvironment::AzureGermanCloud, Feature::ALL)
            .register(CloudEnvironment::AzureStackCloud, [])
    }

    /// An empty builder.
    #[must_use]
    pub fn builder() -> CapabilityTableBuilder {
        CapabilityTableBuilder::default()
    }

    /// Whether `cloud` supports `feature`. Unregistered clouds support nothing.
    #[must_use]
    pub fn supports(&self, cloud: &CloudEnvironment, feature: Feature) -> bool {
        self.entry(cloud)
            .is_some_and(|features| features.contains(&feature))
    }

    #[must_use]
    pub fn is_registered(&self, cloud: &CloudEnvironment) -> bool {
        self.entry(cloud).is_some()
    }

    fn entry(&self, cloud: &CloudEnvironment) -> Option<&BTreeSet<Feature>> {
        match cloud {
            CloudEnvironment::Other(name) => self.entries.get(&CloudEnvironment::named(name)),
            known => self.entries.get(known),
        }
    }

    /// Registered clouds with their features. Well-known clouds come first in
    /// declaration order, then other clouds sorted by name.
    pub fn clouds(&self) -> impl Iterator<Item = (&CloudEnvironment, &BTreeSet<Feature>)> {
        self.entries.iter()
    }
}

/// Collects registrations before freezing them into a [`CapabilityTable`].
#[derive(Debug, Clone, Default)]
pub struct CapabilityTableBuilder {
    entries: BTreeMap<CloudEnvironment, BTreeSet<Feature>>,
}

impl CapabilityTableBuilder {
    /// Register `cloud` with exactly `features`, replacing any earlier entry.
    #[must_use]
    pub fn register(
        mut self,
        cloud: CloudEnvironment,
        features: impl IntoIterator<Item = Feature>,
    ) -> Self {
        let cloud = match cloud {
            CloudEnvironment::Other(name) => CloudEnvironment::named(&name),
            known => known,
        };
        self.entries.insert(cloud, features.into_iter().collect());
        self
    }

    #[must_use]
    pub fn build(self) -> CapabilityTable {
        CapabilityTable {
            entries: self.entries,
        }
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
