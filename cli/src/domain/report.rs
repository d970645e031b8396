//! Result of validating one install-config document.

use poolguard_validation::{CloudEnvironment, ErrorList};
use serde::Serialize;

/// Outcome of a `poolguard validate` run, rendered by both output modes.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// `true` when no findings were reported.
    pub valid: bool,
    /// Cloud the document was validated against.
    pub cloud: CloudEnvironment,
    /// Whether `cloud` has an entry in the capability table.
    pub registered: bool,
    /// Number of Azure machine pools that were checked.
    pub pools: usize,
    pub errors: ErrorList,
}

impl ValidationReport {
    #[must_use]
    pub fn new(cloud: CloudEnvironment, registered: bool, pools: usize, errors: ErrorList) -> Self {
        Self {
            valid: errors.is_empty(),
            cloud,
            registered,
            pools,
            errors,
        }
    }
}
