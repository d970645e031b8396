//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod report;

pub use config::{PoolguardConfig, resolve_cloud, validate_config};
pub use error::{ConfigError, InputError};
pub use report::ValidationReport;
