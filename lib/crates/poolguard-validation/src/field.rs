//! Field paths and field-level validation findings.
//!
//! A validator never fails: it returns an [`ErrorList`] describing every
//! finding, each qualified by the [`FieldPath`] of the offending value.
//! Conversion into a single reportable error happens at the boundary via
//! [`ErrorList::to_aggregate`].

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::AggregateError;
use crate::pool::DiskEncryptionSet;

// ── FieldPath ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Segment {
    Field(String),
    Index(usize),
    Key(String),
}

/// Location of a value inside a nested configuration document.
///
/// Paths are immutable: [`child`](Self::child), [`index`](Self::index) and
/// [`key`](Self::key) return a new path and leave the receiver untouched, so
/// one base path can be shared by several sibling checks.
///
/// ```
/// use poolguard_validation::FieldPath;
///
/// let base = FieldPath::new("compute");
/// let path = base.index(0).child("platform").child("azure");
/// assert_eq!(path.to_string(), "compute[0].platform.azure");
/// assert_eq!(base.to_string(), "compute");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    /// Start a path at the named root field.
    #[must_use]
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::Field(root.into())],
        }
    }

    /// Path to a named field below this one (`a.b`).
    #[must_use]
    pub fn child(&self, name: impl Into<String>) -> Self {
        self.with(Segment::Field(name.into()))
    }

    /// Path to a list element below this one (`a[3]`).
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        self.with(Segment::Index(index))
    }

    /// Path to a map entry below this one (`a[key]`).
    #[must_use]
    pub fn key(&self, key: impl Into<String>) -> Self {
        self.with(Segment::Key(key.into()))
    }

    fn with(&self, segment: Segment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(segment);
        Self { segments }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Field(name) if i == 0 => f.write_str(name)?,
                Segment::Field(name) => write!(f, ".{name}")?,
                Segment::Index(idx) => write!(f, "[{idx}]")?,
                Segment::Key(key) => write!(f, "[{key}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ── ErrorKind / FieldValue ───────────────────────────────────────────────────

/// Category of a field finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    /// The value is present but not acceptable.
    Invalid,
    /// A mandatory value is missing.
    Required,
    /// The value is not one of an enumerated set.
    NotSupported,
}

impl ErrorKind {
    /// Human-readable label used when rendering a finding.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Invalid => "Invalid value",
            Self::Required => "Required value",
            Self::NotSupported => "Unsupported value",
        }
    }
}

/// The offending value carried by a [`FieldError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Bool(bool),
    Int(i64),
    DiskEncryptionSet(DiskEncryptionSet),
    None,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s:?}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::DiskEncryptionSet(set) => write!(
                f,
                "DiskEncryptionSet{{SubscriptionID:{:?}, ResourceGroup:{:?}, Name:{:?}}}",
                set.subscription_id, set.resource_group, set.name
            ),
            Self::None => f.write_str("null"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&DiskEncryptionSet> for FieldValue {
    fn from(value: &DiskEncryptionSet) -> Self {
        Self::DiskEncryptionSet(value.clone())
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

// ── FieldError ───────────────────────────────────────────────────────────────

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub path: FieldPath,
    pub kind: ErrorKind,
    pub value: FieldValue,
    pub detail: String,
}

impl FieldError {
    /// The value at `path` is present but not acceptable.
    #[must_use]
    pub fn invalid(path: FieldPath, value: impl Into<FieldValue>, detail: impl Into<String>) -> Self {
        Self {
            path,
            kind: ErrorKind::Invalid,
            value: value.into(),
            detail: detail.into(),
        }
    }

    /// No value was supplied at `path`.
    #[must_use]
    pub fn required(path: FieldPath, detail: impl Into<String>) -> Self {
        Self {
            path,
            kind: ErrorKind::Required,
            value: FieldValue::None,
            detail: detail.into(),
        }
    }

    /// The value at `path` is not one of `supported`.
    #[must_use]
    pub fn not_supported(path: FieldPath, value: impl Into<FieldValue>, supported: &[&str]) -> Self {
        let quoted: Vec<String> = supported.iter().map(|s| format!("{s:?}")).collect();
        Self {
            path,
            kind: ErrorKind::NotSupported,
            value: value.into(),
            detail: format!("supported values: {}", quoted.join(", ")),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind.label())?;
        if self.kind != ErrorKind::Required {
            write!(f, ": {}", self.value)?;
        }
        if !self.detail.is_empty() {
            write!(f, ": {}", self.detail)?;
        }
        Ok(())
    }
}

// ── ErrorList ────────────────────────────────────────────────────────────────

/// Ordered, append-only collection of findings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorList(Vec<FieldError>);

impl ErrorList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[FieldError] {
        &self.0
    }

    /// Collapse the list into one reportable error, or `None` when empty.
    #[must_use]
    pub fn to_aggregate(&self) -> Option<AggregateError> {
        if self.0.is_empty() {
            None
        } else {
            Some(AggregateError::new(self.0.clone()))
        }
    }

    /// `Ok(())` for an empty list, otherwise the aggregated findings.
    ///
    /// # Errors
    ///
    /// Returns an [`AggregateError`] carrying every finding when the list is
    /// not empty.
    pub fn into_result(self) -> Result<(), AggregateError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(AggregateError::new(self.0))
        }
    }
}

impl Extend<FieldError> for ErrorList {
    fn extend<T: IntoIterator<Item = FieldError>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl FromIterator<FieldError> for ErrorList {
    fn from_iter<T: IntoIterator<Item = FieldError>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ErrorList {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
