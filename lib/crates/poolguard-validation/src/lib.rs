//! Platform eligibility and format validation for Azure machine pools.
//!
//! Validators are pure functions of a machine pool, the target cloud, a
//! [`CapabilityTable`] and a base [`FieldPath`]. They return every finding as
//! an [`ErrorList`] and never stop at the first problem.

pub mod cloud;
pub mod disk;
pub mod error;
pub mod field;
pub mod format;
pub mod host;
pub mod install_config;
pub mod machine_pool;
pub mod pool;

pub use cloud::{CapabilityTable, CapabilityTableBuilder, CloudEnvironment, Feature};
pub use disk::{SUPPORTED_DISK_TYPES, validate_disk_encryption, validate_os_disk};
pub use error::{AggregateError, ParseCloudError};
pub use field::{ErrorKind, ErrorList, FieldError, FieldPath, FieldValue};
pub use format::{is_valid_resource_group, is_valid_resource_name, is_valid_subscription_id};
pub use host::validate_encryption_at_host;
pub use install_config::{InstallConfig, MachinePoolSpec, validate_install_config};
pub use machine_pool::validate_machine_pool;
pub use pool::{DiskEncryptionSet, MachinePool, OsDisk};
