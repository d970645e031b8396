//! `poolguard clouds` — list registered clouds and their features.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::validate_service;

/// Run the clouds command.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded.
pub fn run(app: &AppContext) -> Result<ExitCode> {
    let table = validate_service::load_capabilities(&app.config_store)?;
    app.renderer().render_clouds(&table)?;
    Ok(ExitCode::SUCCESS)
}
