//! Syntax checks for Azure identifiers. Pure functions, no lookups.

use regex::Regex;
use std::sync::LazyLock;

/// Subscription IDs are GUIDs: 8-4-4-4-12 hex digits, either case.
pub static SUBSCRIPTION_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Safety: this is a compile-time constant pattern — cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("valid regex")
});

/// Resource groups: Unicode letters and digits plus `_ - . ( )`, 1–90 chars.
pub static RESOURCE_GROUP_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[-\w.()]{1,90}$").expect("valid regex")
});

/// Generic resource names: ASCII alphanumerics, `_` and `-`, 1–80 chars.
pub static RESOURCE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[a-zA-Z0-9_-]{1,80}$").expect("valid regex")
});

/// Returns `true` if `id` has the GUID layout of an Azure subscription ID.
#[must_use]
pub fn is_valid_subscription_id(id: &str) -> bool {
    SUBSCRIPTION_ID_RE.is_match(id)
}

/// Returns `true` if `name` is a syntactically valid resource group name.
///
/// A trailing period is rejected by Azure even though `.` is otherwise allowed.
#[must_use]
pub fn is_valid_resource_group(name: &str) -> bool {
    RESOURCE_GROUP_RE.is_match(name) && !name.ends_with('.')
}

/// Returns `true` if `name` is a syntactically valid resource name.
#[must_use]
pub fn is_valid_resource_name(name: &str) -> bool {
    RESOURCE_NAME_RE.is_match(name)
}
