//! Failure type for `?`-style consumers
//!
//! Validation itself never errors: outcomes are data. [`ValidationFailure`]
//! only exists for callers that want to turn a finished
//! [`ValidatorResult`](crate::core::ValidatorResult) into a `Result`.

use thiserror::Error;

/// Why a finished validation result did not pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    /// The value itself was reported invalid.
    #[error("validation failed: {}", display_errors(.errors))]
    Invalid {
        /// Diagnostics surfaced by the validator.
        errors: Vec<String>,
    },

    /// A field of a structured value failed.
    #[error("field '{key}': {source}")]
    Field {
        /// Key of the failing field.
        key: String,
        /// The field's own failure.
        source: Box<ValidationFailure>,
    },

    /// An element of a sequence failed.
    #[error("item [{index}]: {source}")]
    Item {
        /// Position of the failing element.
        index: usize,
        /// The element's own failure.
        source: Box<ValidationFailure>,
    },

    /// More than one part of the value failed.
    #[error("{} validations failed", .0.len())]
    Multiple(Vec<ValidationFailure>),
}

fn display_errors(errors: &[String]) -> String {
    if errors.is_empty() {
        "no diagnostics".to_owned()
    } else {
        errors.join("; ")
    }
}

impl ValidationFailure {
    /// Collapses a list of failures: none is success, one is returned as is.
    pub(crate) fn collect(mut failures: Vec<ValidationFailure>) -> Result<(), ValidationFailure> {
        match failures.len() {
            0 => Ok(()),
            1 => Err(failures.remove(0)),
            _ => Err(ValidationFailure::Multiple(failures)),
        }
    }

    /// Returns `true` if this failure points at a field.
    pub fn is_field_error(&self) -> bool {
        matches!(self, Self::Field { .. })
    }

    /// Key of the failing field, if this is a field failure.
    pub fn field_key(&self) -> Option<&str> {
        match self {
            Self::Field { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Number of top-level failures.
    pub fn len(&self) -> usize {
        match self {
            Self::Multiple(failures) => failures.len(),
            _ => 1,
        }
    }

    /// Always `false`; a failure holds at least one cause.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Flattens the failure into `path: message` lines, depth-first.
    ///
    /// Field keys are joined with `.`, element positions appear as `[i]`.
    pub fn messages(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.push_messages("", &mut lines);
        lines
    }

    fn push_messages(&self, path: &str, lines: &mut Vec<String>) {
        match self {
            Self::Invalid { errors } if errors.is_empty() => {
                lines.push(prefixed(path, "invalid"));
            }
            Self::Invalid { errors } => {
                lines.extend(errors.iter().map(|error| prefixed(path, error)));
            }
            Self::Field { key, source } => {
                let path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                source.push_messages(&path, lines);
            }
            Self::Item { index, source } => {
                source.push_messages(&format!("{path}[{index}]"), lines);
            }
            Self::Multiple(failures) => {
                for failure in failures {
                    failure.push_messages(path, lines);
                }
            }
        }
    }
}

fn prefixed(path: &str, message: &str) -> String {
    if path.is_empty() {
        message.to_owned()
    } else {
        format!("{path}: {message}")
    }
}
