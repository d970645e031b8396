//! Encryption-at-host validation.

use crate::cloud::{CapabilityTable, CloudEnvironment, Feature};
use crate::field::{ErrorList, FieldError, FieldPath};
use crate::pool::MachinePool;

/// Reject `encryptionAtHost: true` on clouds that do not support it.
///
/// A pool that does not request encryption at host is never checked.
#[must_use]
pub fn validate_encryption_at_host(
    pool: &MachinePool,
    cloud: &CloudEnvironment,
    capabilities: &CapabilityTable,
    base: &FieldPath,
) -> ErrorList {
    let mut errors = ErrorList::new();
    if pool.encryption_at_host && !capabilities.supports(cloud, Feature::EncryptionAtHost) {
        tracing::debug!(%cloud, path = %base, "encryption at host not supported");
        errors.push(FieldError::invalid(
            base.child("encryptionAtHost"),
            true,
            "encryption at host is not supported on this platform",
        ));
    }
    errors
}
