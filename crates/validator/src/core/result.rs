//! Validation results
//!
//! [`ValidatorResult`] is the outcome of validating one value: a pass/fail
//! flag plus ordered diagnostics. Structured values carry per-field detail in
//! a [`KeyValidatorResult`], slices carry per-element detail in `items`.

use crate::core::error::ValidationFailure;
use indexmap::IndexMap;
use indexmap::map::Iter;
use std::borrow::Cow;

// ============================================================================
// VALIDATOR RESULT
// ============================================================================

/// The outcome of validating a single value.
///
/// # Examples
///
/// ```rust
/// use concord_validator::core::ValidatorResult;
///
/// let ok = ValidatorResult::passed();
/// assert!(ok.valid && ok.errors.is_empty());
///
/// let bad = ValidatorResult::failure("must not be empty");
/// assert!(!bad.valid);
/// assert_eq!(bad.errors, vec!["must not be empty".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidatorResult {
    /// Overall pass/fail for this value.
    pub valid: bool,

    /// Human-readable diagnostics, first detected first listed.
    pub errors: Vec<String>,

    /// Per-field results when the value is a structured object.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub keys: Option<KeyValidatorResult>,

    /// Per-element results when the value is a sequence.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub items: Option<Vec<ValidatorResult>>,
}

impl ValidatorResult {
    /// A passing result with no diagnostics.
    pub fn passed() -> Self {
        Self::passed_with(Vec::new())
    }

    /// A passing result that still carries diagnostics.
    pub fn passed_with(errors: Vec<String>) -> Self {
        Self {
            valid: true,
            errors,
            keys: None,
            items: None,
        }
    }

    /// A failing result with the given diagnostics.
    pub fn failed<I, S>(errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            valid: false,
            errors: errors.into_iter().map(Into::into).collect(),
            keys: None,
            items: None,
        }
    }

    /// A failing result with a single diagnostic.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::failed([message.into()])
    }

    /// Aggregates per-field results: valid iff every field is valid.
    pub fn from_keys(keys: KeyValidatorResult) -> Self {
        Self {
            valid: keys.is_valid(),
            errors: Vec::new(),
            keys: Some(keys),
            items: None,
        }
    }

    /// Aggregates per-element results: valid iff every element is valid.
    pub fn from_items(items: Vec<ValidatorResult>) -> Self {
        Self {
            valid: items.iter().all(|item| item.valid),
            errors: Vec::new(),
            keys: None,
            items: Some(items),
        }
    }

    /// Appends a diagnostic.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.errors.push(message.into());
        self
    }

    /// Returns `true` if the result carries diagnostics.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Converts the result into a `Result` for `?` propagation.
    ///
    /// Walks `valid`, then `keys`, then `items` depth-first. A single failure
    /// is returned as is, several are wrapped in
    /// [`ValidationFailure::Multiple`].
    pub fn check(&self) -> Result<(), ValidationFailure> {
        ValidationFailure::collect(self.failures())
    }

    pub(crate) fn failures(&self) -> Vec<ValidationFailure> {
        let mut failures = Vec::new();
        if !self.valid && (self.has_errors() || (self.keys.is_none() && self.items.is_none())) {
            failures.push(ValidationFailure::Invalid {
                errors: self.errors.clone(),
            });
        }
        if let Some(keys) = &self.keys {
            failures.extend(keys.failures());
        }
        if let Some(items) = &self.items {
            for (index, item) in items.iter().enumerate() {
                if let Err(source) = item.check() {
                    failures.push(ValidationFailure::Item {
                        index,
                        source: Box::new(source),
                    });
                }
            }
        }
        failures
    }
}

// ============================================================================
// KEY VALIDATOR RESULT
// ============================================================================

/// Per-field results, ordered like the key validator that produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct KeyValidatorResult {
    fields: IndexMap<Cow<'static, str>, ValidatorResult>,
}

impl KeyValidatorResult {
    /// Creates an empty result map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty result map with room for `capacity` fields.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: IndexMap::with_capacity(capacity),
        }
    }

    /// Records the result for a field, replacing any earlier one.
    pub fn insert(
        &mut self,
        key: impl Into<Cow<'static, str>>,
        result: ValidatorResult,
    ) -> Option<ValidatorResult> {
        self.fields.insert(key.into(), result)
    }

    /// Looks up the result of a field.
    pub fn get(&self, key: &str) -> Option<&ValidatorResult> {
        self.fields.get(key)
    }

    /// Returns `true` if a result exists for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Field keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|key| &**key)
    }

    /// Iterates over `(key, result)` pairs in order.
    pub fn iter(&self) -> Iter<'_, Cow<'static, str>, ValidatorResult> {
        self.fields.iter()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no field was validated.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns `true` if every field is valid.
    pub fn is_valid(&self) -> bool {
        self.fields.values().all(|result| result.valid)
    }

    /// Consumes the map and returns the underlying ordered map.
    pub fn into_inner(self) -> IndexMap<Cow<'static, str>, ValidatorResult> {
        self.fields
    }

    /// Converts the per-field results into a `Result`.
    pub fn check(&self) -> Result<(), ValidationFailure> {
        ValidationFailure::collect(self.failures())
    }

    fn failures(&self) -> Vec<ValidationFailure> {
        self.fields
            .iter()
            .filter_map(|(key, result)| {
                result.check().err().map(|source| ValidationFailure::Field {
                    key: key.to_string(),
                    source: Box::new(source),
                })
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a KeyValidatorResult {
    type Item = (&'a Cow<'static, str>, &'a ValidatorResult);
    type IntoIter = Iter<'a, Cow<'static, str>, ValidatorResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl<K> FromIterator<(K, ValidatorResult)> for KeyValidatorResult
where
    K: Into<Cow<'static, str>>,
{
    fn from_iter<I: IntoIterator<Item = (K, ValidatorResult)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
