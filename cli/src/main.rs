//! poolguard - validate Azure machine-pool disk and host encryption settings

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use poolguard_cli::cli::Cli;
use poolguard_cli::output::json::{error_code, format_error};

fn main() -> ExitCode {
    // Logs go to stderr so `--json` output on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json = cli.json;
    match cli.run() {
        Ok(code) => code,
        Err(e) => {
            match format_error(&format!("{e:#}"), error_code(&e)) {
                Ok(obj) if json => println!("{obj}"),
                _ => eprintln!("Error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
