//! `poolguard validate` — check the machine pools of an install config.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use poolguard_validation::CloudEnvironment;

use crate::app::AppContext;
use crate::application::services::validate_service;

/// Arguments for `poolguard validate`.
#[derive(Args)]
pub struct ValidateArgs {
    /// Install-config YAML to validate (`-` reads stdin)
    pub file: PathBuf,

    /// Target cloud, overriding `platform.azure.cloudName`
    #[arg(long, env = "POOLGUARD_CLOUD")]
    pub cloud: Option<CloudEnvironment>,
}

/// Run the validate command. Exits with status 1 when findings are reported.
///
/// # Errors
///
/// Returns an error if configuration or the document cannot be loaded.
pub fn run(app: &AppContext, args: &ValidateArgs) -> Result<ExitCode> {
    let report = validate_service::validate_file(
        &app.config_store,
        &app.documents,
        &args.file,
        args.cloud.as_ref(),
    )?;
    app.renderer().render_report(&report)?;
    Ok(if report.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
