//! Typed error enums for the validation crate.

use thiserror::Error;

use crate::field::FieldError;

/// A cloud environment name could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCloudError {
    #[error("cloud name must not be empty")]
    Empty,
}

/// Every finding of one or more validators, collapsed into a single error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", render(.errors))]
pub struct AggregateError {
    errors: Vec<FieldError>,
}

impl AggregateError {
    pub(crate) fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    /// The individual findings, in the order they were reported.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

fn render(errors: &[FieldError]) -> String {
    match errors {
        [single] => single.to_string(),
        many => {
            let parts: Vec<String> = many.iter().map(ToString::to_string).collect();
            format!("[{}]", parts.join(", "))
        }
    }
}
