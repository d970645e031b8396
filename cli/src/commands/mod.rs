//! Command implementations

pub mod clouds;
pub mod validate;
pub mod version;
