//! Install-config document model and tree-wide pool validation.
//!
//! Only the parts of an install config that carry Azure machine pools are
//! modelled; every other key is ignored when deserializing.

use serde::{Deserialize, Serialize};

use crate::cloud::{CapabilityTable, CloudEnvironment};
use crate::field::{ErrorList, FieldPath};
use crate::machine_pool::validate_machine_pool;
use crate::pool::MachinePool;

/// Top-level install-config document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstallConfig {
    pub platform: Platform,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_plane: Option<MachinePoolSpec>,
    pub compute: Vec<MachinePoolSpec>,
}

/// `platform` section. Only Azure is understood.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Platform {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub azure: Option<AzurePlatform>,
}

/// `platform.azure` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AzurePlatform {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_name: Option<CloudEnvironment>,
    /// Settings applied to every pool that leaves them unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_machine_platform: Option<MachinePool>,
}

/// A named pool (`controlPlane` or an entry of `compute`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachinePoolSpec {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i64>,
    pub platform: MachinePoolPlatform,
}

/// `platform` section of a pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachinePoolPlatform {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub azure: Option<MachinePool>,
}

impl InstallConfig {
    /// `platform.azure.cloudName`, if the document names one.
    #[must_use]
    pub fn cloud_name(&self) -> Option<&CloudEnvironment> {
        self.platform.azure.as_ref()?.cloud_name.as_ref()
    }

    /// `platform.azure.defaultMachinePlatform`, if present.
    #[must_use]
    pub fn default_machine_platform(&self) -> Option<&MachinePool> {
        self.platform.azure.as_ref()?.default_machine_platform.as_ref()
    }

    /// Number of named pools that carry Azure settings. The default machine
    /// platform is not a pool and is not counted.
    #[must_use]
    pub fn azure_pool_count(&self) -> usize {
        self.control_plane
            .iter()
            .chain(self.compute.iter())
            .filter(|spec| spec.platform.azure.is_some())
            .count()
    }
}

/// Validate every Azure machine pool in `config` against `cloud`.
///
/// The default machine platform is checked on its own first. The control
/// plane and then each compute pool are checked after being merged with the
/// default, so a setting inherited from the default is reported under every
/// pool that inherits it. Pools without an `azure` section are skipped.
#[must_use]
pub fn validate_install_config(
    config: &InstallConfig,
    cloud: &CloudEnvironment,
    capabilities: &CapabilityTable,
) -> ErrorList {
    let mut errors = ErrorList::new();
    let default = config.default_machine_platform();

    if let Some(default) = default {
        let path = FieldPath::new("platform")
            .child("azure")
            .child("defaultMachinePlatform");
        errors.extend(validate_machine_pool(default, cloud, capabilities, &path));
    }

    let effective = |pool: &MachinePool| match default {
        Some(default) => pool.with_defaults(default),
        None => pool.clone(),
    };

    if let Some(spec) = &config.control_plane
        && let Some(pool) = &spec.platform.azure
    {
        let path = FieldPath::new("controlPlane").child("platform").child("azure");
        errors.extend(validate_machine_pool(&effective(pool), cloud, capabilities, &path));
    }

    let compute = FieldPath::new("compute");
    for (i, spec) in config.compute.iter().enumerate() {
        let Some(pool) = &spec.platform.azure else {
            continue;
        };
        let path = compute.index(i).child("platform").child("azure");
        errors.extend(validate_machine_pool(&effective(pool), cloud, capabilities, &path));
    }

    errors
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    const INSTALL_CONFIG: &str = r"
apiVersion: v1
baseDomain: example.com
metadata:
  name: test-cluster
platform:
  azure:
    cloudName: AzureStackCloud
    region: local
    defaultMachinePlatform:
      encryptionAtHost: true
controlPlane:
  name: master
  replicas: 3
  platform:
    azure:
      osDisk:
        diskType: Premium_LRS
compute:
- name: worker
  replicas: 3
  platform:
    azure:
      osDisk:
        diskEncryptionSet:
          subscriptionId: 08675309-1111-2222-3333-303606808909
          resourceGroup: test-resource-group
          name: test-encryption-set
- name: infra
  platform: {}
";

    fn parse() -> InstallConfig {
        serde_yaml::from_str(INSTALL_CONFIG).expect("valid install config")
    }

    fn paths(errors: &ErrorList) -> Vec<String> {
        errors.iter().map(|e| e.path.to_string()).collect()
    }

    #[test]
    fn test_parse_reads_cloud_and_pools() {
        let config = parse();
        assert_eq!(config.cloud_name(), Some(&CloudEnvironment::AzureStackCloud));
        assert!(config.default_machine_platform().is_some_and(|d| d.encryption_at_host));
        assert_eq!(config.compute.len(), 2);
        assert!(config.compute[1].platform.azure.is_none());
        assert_eq!(config.azure_pool_count(), 2);
    }

    #[test]
    fn test_pool_count_excludes_default_platform() {
        let yaml = "platform:\n  azure:\n    defaultMachinePlatform: {}\ncompute:\n- name: worker\n  platform:\n    azure: {}\n";
        let config: InstallConfig = serde_yaml::from_str(yaml).expect("valid yaml");
        assert!(config.default_machine_platform().is_some());
        assert_eq!(config.azure_pool_count(), 1);
    }

    #[test]
    fn test_empty_document_has_nothing_to_validate() {
        let config: InstallConfig = serde_yaml::from_str("{}").expect("empty yaml");
        assert_eq!(config.cloud_name(), None);
        assert_eq!(config.azure_pool_count(), 0);
        let errors = validate_install_config(
            &config,
            &CloudEnvironment::AzureStackCloud,
            &CapabilityTable::standard(),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_stack_cloud_reports_every_pool_in_document_order() {
        let errors = validate_install_config(
            &parse(),
            &CloudEnvironment::AzureStackCloud,
            &CapabilityTable::standard(),
        );
        assert_eq!(
            paths(&errors),
            [
                "platform.azure.defaultMachinePlatform.encryptionAtHost",
                "controlPlane.platform.azure.encryptionAtHost",
                "compute[0].platform.azure.osDisk.diskEncryptionSet.diskEncryptionSet",
                "compute[0].platform.azure.encryptionAtHost",
            ]
        );
    }

    #[test]
    fn test_public_cloud_accepts_document() {
        let errors = validate_install_config(
            &parse(),
            &CloudEnvironment::AzurePublicCloud,
            &CapabilityTable::standard(),
        );
        assert!(errors.is_empty(), "got: {errors:?}");
    }

    #[test]
    fn test_empty_cloud_name_is_rejected_on_parse() {
        let yaml = "platform:\n  azure:\n    cloudName: \"\"\n";
        assert!(serde_yaml::from_str::<InstallConfig>(yaml).is_err());
    }
}
