//! Shared mock infrastructure for unit tests.
//!
//! Provides in-memory [`ConfigStore`] and [`DocumentSource`] implementations so
//! each test file doesn't have to re-define the same boilerplate.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use anyhow::Result;
use poolguard_cli::application::ports::{ConfigStore, DocumentSource};
use poolguard_cli::domain::config::PoolguardConfig;
use poolguard_cli::infra::fs::parse_install_config;
use poolguard_validation::InstallConfig;

// ── Mock: config store ────────────────────────────────────────────────────────

/// Returns a fixed configuration.
pub struct FixedConfig(pub PoolguardConfig);

impl ConfigStore for FixedConfig {
    fn load(&self) -> Result<PoolguardConfig> {
        Ok(self.0.clone())
    }

    fn path(&self) -> Result<PathBuf> {
        Ok(PathBuf::from("/mock/config.yaml"))
    }
}

/// Parses configuration YAML held in memory.
pub struct YamlConfig(pub &'static str);

impl ConfigStore for YamlConfig {
    fn load(&self) -> Result<PoolguardConfig> {
        Ok(serde_yaml::from_str(self.0)?)
    }

    fn path(&self) -> Result<PathBuf> {
        Ok(PathBuf::from("/mock/config.yaml"))
    }
}

/// Always fails to load.
pub struct BrokenConfig;

impl ConfigStore for BrokenConfig {
    fn load(&self) -> Result<PoolguardConfig> {
        anyhow::bail!("config store unavailable")
    }

    fn path(&self) -> Result<PathBuf> {
        anyhow::bail!("no path")
    }
}

// ── Mock: document source ─────────────────────────────────────────────────────

/// Serves one in-memory install-config document regardless of path.
pub struct InlineDocument(pub &'static str);

impl DocumentSource for InlineDocument {
    fn read(&self, path: &Path) -> Result<InstallConfig> {
        parse_install_config(self.0, path)
    }
}

pub fn doc_path() -> PathBuf {
    PathBuf::from("install-config.yaml")
}

// ── Fixtures ──────────────────────────────────────────────────────────────────

/// Control plane requests encryption at host, one compute pool references a
/// disk encryption set. No cloud name.
pub const ENCRYPTED_POOLS: &str = r"
platform:
  azure:
    region: eastus
controlPlane:
  name: master
  platform:
    azure:
      encryptionAtHost: true
compute:
- name: worker
  platform:
    azure:
      osDisk:
        diskType: Premium_LRS
        diskEncryptionSet:
          subscriptionId: 08675309-1111-2222-3333-303606808909
          resourceGroup: test-resource-group
          name: test-encryption-set
";

/// Same as [`ENCRYPTED_POOLS`] but pinned to Azure Stack.
pub const STACK_DOCUMENT: &str = r"
platform:
  azure:
    cloudName: AzureStackCloud
compute:
- name: worker
  platform:
    azure:
      encryptionAtHost: true
";

/// Every encryption-set field malformed.
pub const MALFORMED_SET: &str = r#"
compute:
- name: worker
  platform:
    azure:
      osDisk:
        diskEncryptionSet:
          subscriptionId: invalid
          resourceGroup: ""
          name: ""
"#;
