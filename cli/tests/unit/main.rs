//! Unit tests for poolguard CLI
//!
//! These tests use mocked ports and run fast without external I/O.

mod config_store;
mod mocks;
mod property_tests;
mod validate_service;
