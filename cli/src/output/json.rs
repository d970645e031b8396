//! JSON output helpers.
//!
//! Successful commands print a pretty-printed document on stdout. Failed
//! commands print the error object produced by [`format_error`].

use anyhow::{Context, Result};
use poolguard_validation::CapabilityTable;

use crate::domain::error::{ConfigError, InputError};
use crate::domain::report::ValidationReport;

/// Renders domain types as JSON on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    /// Render a validation report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_report(&self, report: &ValidationReport) -> Result<()> {
        let out = serde_json::to_string_pretty(report).context("JSON serialization failed")?;
        println!("{out}");
        Ok(())
    }

    /// Render the registered clouds as `[{"cloud": ..., "features": [...]}]`.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_clouds(&self, table: &CapabilityTable) -> Result<()> {
        println!("{}", clouds_json(table)?);
        Ok(())
    }

    /// Render the CLI version as `{"version": ...}`.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        let obj = serde_json::json!({ "version": version });
        let out = serde_json::to_string(&obj).context("JSON serialization failed")?;
        println!("{out}");
        Ok(())
    }
}

/// Pretty-printed JSON listing of a capability table.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn clouds_json(table: &CapabilityTable) -> Result<String> {
    let entries: Vec<serde_json::Value> = table
        .clouds()
        .map(|(cloud, features)| serde_json::json!({ "cloud": cloud, "features": features }))
        .collect();
    serde_json::to_string_pretty(&entries).context("JSON serialization failed")
}

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails (should not happen in
/// practice — `serde_json` only fails on non-finite floats and maps with
/// non-string keys, neither of which appear here).
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Stable error code for a command failure.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(e) = err.downcast_ref::<InputError>() {
        e.code()
    } else if let Some(e) = err.downcast_ref::<ConfigError>() {
        e.code()
    } else {
        "INTERNAL_ERROR"
    }
}
