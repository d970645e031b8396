//! Filesystem infrastructure — implements `DocumentSource`.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use poolguard_validation::InstallConfig;

use crate::application::ports::DocumentSource;
use crate::domain::error::InputError;

/// Reads install-config YAML from a file, or from stdin for `-`.
pub struct YamlDocumentSource;

impl DocumentSource for YamlDocumentSource {
    fn read(&self, path: &Path) -> Result<InstallConfig> {
        let content = if path == Path::new("-") {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("cannot read install config from stdin")?;
            buf
        } else {
            if !path.exists() {
                return Err(InputError::NotFound(path.display().to_string()).into());
            }
            std::fs::read_to_string(path)
                .with_context(|| format!("cannot read {}", path.display()))?
        };
        parse_install_config(&content, path)
    }
}

/// Parse install-config YAML. An empty document is treated as `{}`.
///
/// # Errors
///
/// Returns `InputError::Malformed` if the YAML does not describe an install config.
pub fn parse_install_config(content: &str, path: &Path) -> Result<InstallConfig> {
    if content.trim().is_empty() {
        return Ok(InstallConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| {
        InputError::Malformed {
            path: path.display().to_string(),
            message: e.to_string(),
        }
        .into()
    })
}
