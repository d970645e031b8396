//! Human-readable terminal renderer.

use owo_colors::OwoColorize as _;
use poolguard_validation::{CapabilityTable, FieldError};

use crate::domain::report::ValidationReport;
use crate::output::{OutputContext, Styles};

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version information.
    pub fn render_version(&self, version: &str) {
        println!("poolguard {version}");
    }

    /// Render a validation report. Findings go to stderr and are never
    /// suppressed; the summary respects `quiet`.
    pub fn render_report(&self, report: &ValidationReport) {
        if !report.registered {
            self.ctx.warn(&format!(
                "Cloud '{}' is not registered; optional features are treated as unsupported",
                report.cloud
            ));
        }

        if report.valid {
            self.ctx.success(&format!(
                "{} valid for {}",
                pools_phrase(report.pools),
                report.cloud
            ));
            return;
        }

        self.ctx.header(&format!(
            "Validated {} for {}",
            pools_phrase(report.pools),
            report.cloud
        ));
        for error in &report.errors {
            self.ctx.error(&format_finding(error, &self.ctx.styles));
        }
        self.ctx.error(&problems_phrase(report.errors.len()));
    }

    /// Render the registered clouds and their features.
    pub fn render_clouds(&self, table: &CapabilityTable) {
        self.ctx.header("Registered clouds:");
        for (cloud, features) in table.clouds() {
            let list = if features.is_empty() {
                "(none)".style(self.ctx.styles.dim).to_string()
            } else {
                features
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            self.ctx.kv(&format!("{:<24}", cloud.as_str()), &list);
        }
        self.ctx
            .info("Clouds not listed here support no optional features.");
    }
}

/// `path: Kind: value: detail` with the path highlighted.
#[must_use]
pub fn format_finding(error: &FieldError, styles: &Styles) -> String {
    let rendered = error.to_string();
    let path = error.path.to_string();
    let rest = rendered.strip_prefix(path.as_str()).unwrap_or(&rendered);
    format!("{}{rest}", path.style(styles.path))
}

fn pools_phrase(count: usize) -> String {
    match count {
        1 => "1 machine pool".to_string(),
        n => format!("{n} machine pools"),
    }
}

fn problems_phrase(count: usize) -> String {
    match count {
        1 => "1 problem found".to_string(),
        n => format!("{n} problems found"),
    }
}
