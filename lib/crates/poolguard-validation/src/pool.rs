//! Azure machine-pool settings as they appear in an install config.

use serde::{Deserialize, Serialize};

/// Azure-specific settings of one machine pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MachinePool {
    pub os_disk: OsDisk,
    /// Encrypt host-local caches and temp disks of every VM in the pool.
    pub encryption_at_host: bool,
}

/// Operating-system disk of each VM in the pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OsDisk {
    /// Size in GiB. Zero means the platform default.
    #[serde(rename = "diskSizeGB")]
    pub disk_size_gb: i32,
    /// Storage account type, e.g. `Premium_LRS`. Empty means the platform default.
    pub disk_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_encryption_set: Option<DiskEncryptionSet>,
}

/// Reference to a customer-managed disk encryption set.
///
/// Only the shape of the reference is checked; whether the resource exists is
/// not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiskEncryptionSet {
    #[serde(rename = "subscriptionId")]
    pub subscription_id: String,
    pub resource_group: String,
    pub name: String,
}

impl MachinePool {
    /// Overlay this pool on the platform-wide default pool.
    ///
    /// Unset fields (empty disk type, zero size, no encryption set) are taken
    /// from `default`; `encryptionAtHost` is enabled when either side enables it.
    #[must_use]
    pub fn with_defaults(&self, default: &MachinePool) -> MachinePool {
        let mut merged = self.clone();
        if merged.os_disk.disk_type.is_empty() {
            merged.os_disk.disk_type.clone_from(&default.os_disk.disk_type);
        }
        if merged.os_disk.disk_size_gb == 0 {
            merged.os_disk.disk_size_gb = default.os_disk.disk_size_gb;
        }
        if merged.os_disk.disk_encryption_set.is_none() {
            merged
                .os_disk
                .disk_encryption_set
                .clone_from(&default.os_disk.disk_encryption_set);
        }
        merged.encryption_at_host |= default.encryption_at_host;
        merged
    }
}
