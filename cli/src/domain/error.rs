//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator. `code()` gives the stable identifier used in JSON
//! error output.

use thiserror::Error;

// ── Input errors ──────────────────────────────────────────────────────────────

/// Errors related to the document being validated.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Input file not found: {0}")]
    NotFound(String),

    #[error("Cannot parse {path} as an install config: {message}")]
    Malformed { path: String, message: String },
}

impl InputError {
    /// Stable machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "INPUT_NOT_FOUND",
            Self::Malformed { .. } => "INPUT_MALFORMED",
        }
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to the poolguard configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot parse configuration {path}: {message}")]
    Malformed { path: String, message: String },

    #[error(
        "Unknown cloud '{given}' in configuration. Did you mean '{canonical}'? Cloud names are case-sensitive."
    )]
    CloudNameCase { given: String, canonical: String },
}

impl ConfigError {
    /// Stable machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Malformed { .. } => "CONFIG_MALFORMED",
            Self::CloudNameCase { .. } => "CONFIG_INVALID",
        }
    }
}
