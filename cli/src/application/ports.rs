//! Port traits implemented by the infrastructure layer.

use std::path::{Path, PathBuf};

use anyhow::Result;
use poolguard_validation::InstallConfig;

use crate::domain::config::PoolguardConfig;

/// Loads the poolguard configuration.
pub trait ConfigStore {
    /// Load configuration, returning defaults when none has been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration exists but cannot be read or parsed.
    fn load(&self) -> Result<PoolguardConfig>;

    /// Location the configuration is read from.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}

/// Reads install-config documents.
pub trait DocumentSource {
    /// Read and parse the document at `path` (`-` means stdin).
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read or parsed.
    fn read(&self, path: &Path) -> Result<InstallConfig>;
}
