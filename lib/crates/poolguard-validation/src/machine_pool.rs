//! Full validation of a single machine pool.

use crate::cloud::{CapabilityTable, CloudEnvironment};
use crate::disk::{validate_disk_encryption, validate_os_disk};
use crate::field::{ErrorList, FieldPath};
use crate::host::validate_encryption_at_host;
use crate::pool::MachinePool;

/// Run every pool-level check against `pool`, rooted at `base`.
///
/// Order: OS disk type/size under `<base>.osDisk`, the encryption set under
/// `<base>.osDisk.diskEncryptionSet`, then `<base>.encryptionAtHost`.
#[must_use]
pub fn validate_machine_pool(
    pool: &MachinePool,
    cloud: &CloudEnvironment,
    capabilities: &CapabilityTable,
    base: &FieldPath,
) -> ErrorList {
    let os_disk = base.child("osDisk");
    let mut errors = validate_os_disk(pool, &os_disk);
    errors.extend(validate_disk_encryption(
        pool,
        cloud,
        capabilities,
        &os_disk.child("diskEncryptionSet"),
    ));
    errors.extend(validate_encryption_at_host(pool, cloud, capabilities, base));
    tracing::debug!(path = %base, %cloud, findings = errors.len(), "machine pool validated");
    errors
}
