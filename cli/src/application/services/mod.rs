//! Use-case orchestration services.

pub mod validate_service;
