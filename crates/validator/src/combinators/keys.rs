//! KEYS - validates each field of a structured value with its own chain
//!
//! A [`KeyValidator`] is configured once with one [`ValidatorChain`] per
//! field and then applied to any number of values. The result is a
//! [`KeyValidatorResult`] whose keys are exactly the configured keys, in
//! declaration order.
//!
//! Fields are validated one after another. If a field answers later, the
//! next field's chain is not started until that answer arrived, and the
//! overall result is deferred.
//!
//! # Examples
//!
//! ```rust
//! use concord_validator::combinators::{KeyValidator, ValidatorChain, validate_keys};
//! use concord_validator::core::{validator_fn, ValidatorResult};
//!
//! struct User {
//!     name: String,
//!     age: u32,
//! }
//!
//! let rules = KeyValidator::new()
//!     .key("name", |u: &User| u.name.as_str(), ValidatorChain::new()
//!         .with(validator_fn(|name: &str| {
//!             if name.is_empty() {
//!                 ValidatorResult::failure("required")
//!             } else {
//!                 ValidatorResult::passed()
//!             }
//!         })))
//!     .key("age", |u: &User| &u.age, ValidatorChain::new());
//!
//! let user = User { name: "Alice".into(), age: 30 };
//! let result = validate_keys(&rules)(&user).into_ready().ok();
//! let keys: Vec<_> = result.iter().flat_map(|r| r.keys()).collect();
//! assert_eq!(keys, vec!["name", "age"]);
//! ```

use crate::combinators::chain::{ValidatorChain, validate_chain};
use crate::core::{KeyValidatorResult, Outcome, Validator, ValidatorResult};
use indexmap::IndexMap;
use std::borrow::Cow;
use std::fmt;

// ============================================================================
// FIELD RULE
// ============================================================================

/// One configured field: how to reach it and which chain to run on it.
trait FieldRule<O: ?Sized>: Send + Sync {
    fn run<'a>(&'a self, object: &'a O) -> Outcome<'a, ValidatorResult>;

    fn chain_len(&self) -> usize;
}

/// A field projected out of the object by `accessor` and validated with
/// `chain`. The object type only appears in the accessor's signature.
struct FieldChain<U: ?Sized, F> {
    accessor: F,
    chain: ValidatorChain<U>,
}

impl<O, U, F> FieldRule<O> for FieldChain<U, F>
where
    O: ?Sized,
    U: ?Sized + Sync,
    F: Fn(&O) -> &U + Send + Sync,
{
    fn run<'a>(&'a self, object: &'a O) -> Outcome<'a, ValidatorResult> {
        validate_chain((self.accessor)(object), &self.chain)
    }

    fn chain_len(&self) -> usize {
        self.chain.len()
    }
}

// ============================================================================
// KEY VALIDATOR
// ============================================================================

/// Per-field validation configuration for values of type `O`.
///
/// Keys are validated in the order they were declared. Declaring a key a
/// second time replaces its chain but keeps its original position.
///
/// `O` may borrow (`KeyValidator<Form<'a>>`); only the field types and the
/// accessors must be `'static`. A key validator over a borrowing type can
/// be applied directly but cannot be boxed into a [`ValidatorChain`], which
/// only holds `'static` validators.
pub struct KeyValidator<O: ?Sized> {
    fields: IndexMap<Cow<'static, str>, Box<dyn FieldRule<O>>>,
}

impl<O: ?Sized> KeyValidator<O> {
    /// Creates a key validator with no fields.
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Declares a field.
    ///
    /// # Arguments
    ///
    /// * `key` - Key the field's result is reported under
    /// * `accessor` - Borrows the field out of the object
    /// * `chain` - Validators run against the field
    #[must_use = "builder methods must be chained or built"]
    pub fn key<U, F>(
        mut self,
        key: impl Into<Cow<'static, str>>,
        accessor: F,
        chain: ValidatorChain<U>,
    ) -> Self
    where
        U: ?Sized + Sync + 'static,
        F: Fn(&O) -> &U + Send + Sync + 'static,
    {
        let key = key.into();
        let rule = FieldChain { accessor, chain };
        if self.fields.insert(key.clone(), Box::new(rule)).is_some() {
            tracing::debug!(key = %key, "field declared twice, keeping the latest chain");
        }
        self
    }

    /// Number of configured fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no field is configured.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Configured keys in validation order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|key| &**key)
    }

    /// Returns `true` if `key` is configured.
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }
}

impl<O: ?Sized + Sync> KeyValidator<O> {
    /// Validates every configured field of `value`.
    ///
    /// Fields run in declaration order. While every chain answers
    /// immediately the map is built in place and returned ready; from the
    /// first deferred field on, the remaining fields are awaited one by one
    /// inside a single deferred outcome.
    pub fn validate<'a>(&'a self, value: &'a O) -> Outcome<'a, KeyValidatorResult> {
        let mut results = KeyValidatorResult::with_capacity(self.fields.len());

        for (position, (key, rule)) in self.fields.iter().enumerate() {
            tracing::trace!(key = %key, validators = rule.chain_len(), "validating field");
            match rule.run(value) {
                Outcome::Ready(result) => {
                    results.insert(key.clone(), result);
                }
                Outcome::Deferred(pending) => {
                    return Outcome::deferred(async move {
                        results.insert(key.clone(), pending.await);
                        for (key, rule) in self.fields.iter().skip(position + 1) {
                            tracing::trace!(key = %key, validators = rule.chain_len(), "validating field");
                            results.insert(key.clone(), rule.run(value).resolve().await);
                        }
                        results
                    });
                }
            }
        }

        Outcome::ready(results)
    }
}

impl<O: ?Sized> Default for KeyValidator<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: ?Sized> fmt::Debug for KeyValidator<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.fields
                    .iter()
                    .map(|(key, rule)| (&**key, rule.chain_len())),
            )
            .finish()
    }
}

/// A key validator is a validator for the whole object, so objects nest.
///
/// The result carries the per-field map under `keys`, is valid iff every
/// field is valid, and has no top-level diagnostics.
impl<O: ?Sized + Sync> Validator<O> for KeyValidator<O> {
    fn validate<'a>(&'a self, value: &'a O) -> Outcome<'a, ValidatorResult> {
        KeyValidator::validate(self, value).map(|keys| {
            let result = ValidatorResult::from_keys(keys);
            tracing::debug!(valid = result.valid, "key validation finished");
            result
        })
    }

    fn name(&self) -> &str {
        "KeyValidator"
    }
}

// ============================================================================
// ENTRY POINT
// ============================================================================

/// Binds a configured [`KeyValidator`] and returns the function that applies
/// it to a value.
pub fn validate_keys<'a, O>(
    key_validator: &'a KeyValidator<O>,
) -> impl Fn(&'a O) -> Outcome<'a, KeyValidatorResult> + 'a
where
    O: ?Sized + Sync,
{
    move |value| key_validator.validate(value)
}

// ============================================================================
// TESTS
// ============================================================================
