//! Application service — validate install-config documents.

use std::path::Path;

use anyhow::Result;
use poolguard_validation::{CapabilityTable, CloudEnvironment, validate_install_config};

use crate::application::ports::{ConfigStore, DocumentSource};
use crate::domain::config::{resolve_cloud, validate_config};
use crate::domain::report::ValidationReport;

/// Load configuration and turn it into the capability table for this run.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or is invalid.
pub fn load_capabilities(store: &impl ConfigStore) -> Result<CapabilityTable> {
    let config = store.load()?;
    validate_config(&config)?;
    Ok(config.capability_table())
}

/// Validate the document at `path`.
///
/// The capability table is built once from configuration and shared by every
/// pool in the document.
///
/// # Errors
///
/// Returns an error if configuration or the document cannot be loaded.
/// Validation findings are not errors; they are carried in the report.
pub fn validate_file(
    store: &impl ConfigStore,
    source: &impl DocumentSource,
    path: &Path,
    cloud_flag: Option<&CloudEnvironment>,
) -> Result<ValidationReport> {
    let config = store.load()?;
    validate_config(&config)?;
    let table = config.capability_table();

    let document = source.read(path)?;
    let cloud = resolve_cloud(cloud_flag, document.cloud_name(), &config);
    let registered = table.is_registered(&cloud);
    if !registered {
        tracing::info!(%cloud, "cloud is not registered; optional features will be rejected");
    }

    let errors = validate_install_config(&document, &cloud, &table);
    tracing::info!(
        path = %path.display(),
        %cloud,
        pools = document.azure_pool_count(),
        findings = errors.len(),
        "document validated",
    );

    Ok(ValidationReport::new(
        cloud,
        registered,
        document.azure_pool_count(),
        errors,
    ))
}
