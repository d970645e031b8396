//! OS disk validation: disk encryption sets, disk type and size.

use crate::cloud::{CapabilityTable, CloudEnvironment, Feature};
use crate::field::{ErrorList, FieldError, FieldPath};
use crate::format::{is_valid_resource_group, is_valid_resource_name, is_valid_subscription_id};
use crate::pool::MachinePool;

/// Storage account types accepted for OS disks.
pub const SUPPORTED_DISK_TYPES: &[&str] = &["Premium_LRS", "StandardSSD_LRS", "Standard_LRS"];

/// Validate the OS disk encryption set of `pool` for `cloud`.
///
/// Returns nothing when no encryption set is requested. Otherwise reports,
/// in this order and without stopping early:
/// 1. `<base>.diskEncryptionSet` if `cloud` does not support encryption sets
/// 2. `<base>.subscriptionID` if the subscription ID is not a GUID
/// 3. `<base>.resourceGroup` if the resource group name is malformed
/// 4. `<base>.diskEncryptionSetName` if the set name is malformed
#[must_use]
pub fn validate_disk_encryption(
    pool: &MachinePool,
    cloud: &CloudEnvironment,
    capabilities: &CapabilityTable,
    base: &FieldPath,
) -> ErrorList {
    let mut errors = ErrorList::new();
    let Some(set) = &pool.os_disk.disk_encryption_set else {
        return errors;
    };

    if !capabilities.supports(cloud, Feature::DiskEncryptionSets) {
        tracing::debug!(%cloud, path = %base, "disk encryption sets not supported");
        errors.push(FieldError::invalid(
            base.child("diskEncryptionSet"),
            set,
            "disk encryption sets are not supported on this platform",
        ));
    }

    if !is_valid_subscription_id(&set.subscription_id) {
        errors.push(FieldError::invalid(
            base.child("subscriptionID"),
            set.subscription_id.as_str(),
            "invalid subscription ID format",
        ));
    }

    if !is_valid_resource_group(&set.resource_group) {
        errors.push(FieldError::invalid(
            base.child("resourceGroup"),
            set.resource_group.as_str(),
            "invalid resource group format",
        ));
    }

    if !is_valid_resource_name(&set.name) {
        errors.push(FieldError::invalid(
            base.child("diskEncryptionSetName"),
            set.name.as_str(),
            "invalid name format",
        ));
    }

    errors
}

/// Validate the disk type and size of the OS disk. `base` is the path of the
/// `osDisk` object.
///
/// Unset values (empty type, zero size) mean "platform default" and pass.
#[must_use]
pub fn validate_os_disk(pool: &MachinePool, base: &FieldPath) -> ErrorList {
    let mut errors = ErrorList::new();
    let disk = &pool.os_disk;

    if !disk.disk_type.is_empty() && !SUPPORTED_DISK_TYPES.contains(&disk.disk_type.as_str()) {
        errors.push(FieldError::not_supported(
            base.child("diskType"),
            disk.disk_type.as_str(),
            SUPPORTED_DISK_TYPES,
        ));
    }

    if disk.disk_size_gb < 0 {
        errors.push(FieldError::invalid(
            base.child("diskSizeGB"),
            disk.disk_size_gb,
            "storage disk size must be positive",
        ));
    }

    errors
}
