//! CHAIN - runs an ordered list of validators against one value
//!
//! The chain walks its validators in order and applies one continuation
//! rule after every step:
//!
//! - the step reported errors: move on to the next validator, and start the
//!   downstream accumulator empty (the reported errors are dropped)
//! - the step reported no errors: stop, its result is the answer
//!
//! Running off the end of the chain yields `{ valid: true, errors: <acc> }`.
//! A chain therefore stops at the first *clean* validator, and a chain whose
//! validators all report errors ends up valid with no diagnostics.
//!
//! # Examples
//!
//! ```rust
//! use concord_validator::combinators::{ValidatorChain, validate_chain};
//! use concord_validator::core::{validator_fn, ValidatorResult};
//!
//! let chain = ValidatorChain::new()
//!     .with(validator_fn(|_: &str| ValidatorResult::failure("bad")))
//!     .with(validator_fn(|_: &str| ValidatorResult::passed()));
//!
//! let result = validate_chain("value", &chain).into_ready().ok();
//! assert_eq!(result, Some(ValidatorResult::passed()));
//! ```

use crate::core::{Outcome, Validator, ValidatorResult};
use futures::FutureExt;
use futures::future::BoxFuture;
use std::fmt;

// ============================================================================
// VALIDATOR CHAIN
// ============================================================================

/// An ordered list of validators for values of type `V`.
///
/// Order defines evaluation order. Empty chains are allowed and always pass.
pub struct ValidatorChain<V: ?Sized> {
    validators: Vec<Box<dyn Validator<V>>>,
}

impl<V: ?Sized> ValidatorChain<V> {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Appends a validator.
    #[must_use = "builder methods must be chained or built"]
    pub fn with<T>(mut self, validator: T) -> Self
    where
        T: Validator<V> + 'static,
    {
        self.push(validator);
        self
    }

    /// Appends a validator in place.
    pub fn push<T>(&mut self, validator: T)
    where
        T: Validator<V> + 'static,
    {
        self.validators.push(Box::new(validator));
    }

    /// Appends an already boxed validator.
    pub fn push_boxed(&mut self, validator: Box<dyn Validator<V>>) {
        self.validators.push(validator);
    }

    /// Number of validators.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns `true` if the chain has no validators.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Returns the validator at `index`.
    pub fn get(&self, index: usize) -> Option<&dyn Validator<V>> {
        self.validators.get(index).map(|validator| &**validator)
    }

    /// Iterates over the validators in order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Validator<V>> {
        self.validators.iter().map(|validator| &**validator)
    }
}

impl<V: ?Sized + Sync> ValidatorChain<V> {
    /// Runs the chain against `value`. Same as [`validate_chain`].
    pub fn validate<'a>(&'a self, value: &'a V) -> Outcome<'a, ValidatorResult> {
        validate_chain(value, self)
    }
}

impl<V: ?Sized> Default for ValidatorChain<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: ?Sized> FromIterator<Box<dyn Validator<V>>> for ValidatorChain<V> {
    fn from_iter<I: IntoIterator<Item = Box<dyn Validator<V>>>>(iter: I) -> Self {
        Self {
            validators: iter.into_iter().collect(),
        }
    }
}

impl<V: ?Sized> From<Vec<Box<dyn Validator<V>>>> for ValidatorChain<V> {
    fn from(validators: Vec<Box<dyn Validator<V>>>) -> Self {
        Self { validators }
    }
}

impl<V: ?Sized> fmt::Debug for ValidatorChain<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.validators.iter().map(|v| v.name()))
            .finish()
    }
}

/// A chain is itself a validator, so chains nest.
impl<V: ?Sized + Sync> Validator<V> for ValidatorChain<V> {
    fn validate<'a>(&'a self, value: &'a V) -> Outcome<'a, ValidatorResult> {
        validate_chain(value, self)
    }

    fn name(&self) -> &str {
        "ValidatorChain"
    }
}

// ============================================================================
// STATE MACHINE
// ============================================================================

/// What the chain does after one validator answered.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    /// Errors were reported: go on at this index with an empty accumulator.
    Continue(usize),
    /// No errors: this result is final.
    Accept(ValidatorResult),
}

impl Step {
    fn after(index: usize, result: ValidatorResult) -> Self {
        if result.has_errors() {
            tracing::trace!(
                index,
                errors = result.errors.len(),
                "validator reported errors, advancing"
            );
            Self::Continue(index + 1)
        } else {
            tracing::trace!(index, valid = result.valid, "validator clean, accepting");
            Self::Accept(result)
        }
    }
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Runs `chain` against `value` from the first validator.
pub fn validate_chain<'a, V>(value: &'a V, chain: &'a ValidatorChain<V>) -> Outcome<'a, ValidatorResult>
where
    V: ?Sized + Sync,
{
    validate_chain_from(value, chain, 0, Vec::new())
}

/// Runs `chain` against `value` starting at `start`, with `errors` as the
/// initial accumulator.
///
/// The accumulator only surfaces if the chain is exhausted before any
/// validator runs; the first step that reports errors resets it.
///
/// Immediate validators are driven in a loop without touching an executor.
/// The first deferred answer turns the remainder of the run into a single
/// deferred outcome; later validators are not invoked before it resolves.
pub fn validate_chain_from<'a, V>(
    value: &'a V,
    chain: &'a ValidatorChain<V>,
    start: usize,
    errors: Vec<String>,
) -> Outcome<'a, ValidatorResult>
where
    V: ?Sized + Sync,
{
    let mut index = start;
    let mut errors = errors;

    loop {
        let Some(validator) = chain.get(index) else {
            return Outcome::ready(ValidatorResult::passed_with(errors));
        };

        tracing::trace!(index, validator = validator.name(), "running validator");

        match validator.validate(value) {
            Outcome::Ready(result) => match Step::after(index, result) {
                Step::Continue(next) => {
                    index = next;
                    errors = Vec::new();
                }
                Step::Accept(result) => return Outcome::ready(result),
            },
            Outcome::Deferred(pending) => {
                return Outcome::Deferred(drive_deferred(value, chain, index, pending).boxed());
            }
        }
    }
}

/// Finishes a run whose validator at `index` answered with `pending`.
///
/// The remaining steps are awaited one by one in this single future, so a
/// long chain of deferred validators does not nest futures.
async fn drive_deferred<'a, V>(
    value: &'a V,
    chain: &'a ValidatorChain<V>,
    mut index: usize,
    pending: BoxFuture<'a, ValidatorResult>,
) -> ValidatorResult
where
    V: ?Sized + Sync,
{
    let mut result = pending.await;

    loop {
        match Step::after(index, result) {
            Step::Accept(result) => return result,
            Step::Continue(next) => {
                let Some(validator) = chain.get(next) else {
                    return ValidatorResult::passed();
                };
                tracing::trace!(index = next, validator = validator.name(), "running validator");
                index = next;
                result = validator.validate(value).resolve().await;
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{deferred_fn, validator_fn};
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    fn clean() -> impl Validator<str> {
        validator_fn(|_: &str| ValidatorResult::passed())
    }

    fn fails(message: &'static str) -> impl Validator<str> {
        validator_fn(move |_: &str| ValidatorResult::failure(message))
    }

    fn ready(outcome: Outcome<'_, ValidatorResult>) -> ValidatorResult {
        match outcome.into_ready() {
            Ok(result) => result,
            Err(_) => panic!("expected an immediate outcome"),
        }
    }

    #[test]
    fn test_empty_chain_passes() {
        let chain = ValidatorChain::<str>::new();
        assert_eq!(ready(validate_chain("x", &chain)), ValidatorResult::passed());
    }

    #[test]
    fn test_single_clean_validator_result_unchanged() {
        let chain = ValidatorChain::new()
            .with(validator_fn(|_: &str| ValidatorResult::passed_with(Vec::new())));
        assert_eq!(ready(validate_chain("x", &chain)), ValidatorResult::passed());
    }

    #[test]
    fn test_invalid_result_without_errors_is_accepted() {
        let verdict = ValidatorResult {
            valid: false,
            errors: Vec::new(),
            keys: None,
            items: None,
        };
        let expected = verdict.clone();
        let chain = ValidatorChain::new()
            .with(validator_fn(move |_: &str| verdict.clone()))
            .with(clean());

        assert_eq!(ready(validate_chain("x", &chain)), expected);
    }

    #[test]
    fn test_stops_at_first_clean_validator() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let record = |tag: &'static str, result: ValidatorResult| {
            let calls = Arc::clone(&calls);
            validator_fn(move |_: &str| {
                calls.lock().unwrap().push(tag);
                result.clone()
            })
        };

        let chain = ValidatorChain::new()
            .with(record("a", ValidatorResult::failure("bad")))
            .with(record("b", ValidatorResult::passed()))
            .with(record("c", ValidatorResult::failure("never")));

        assert_eq!(ready(validate_chain("x", &chain)), ValidatorResult::passed());
        assert_eq!(*calls.lock().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_trailing_failure_ends_valid() {
        let chain = ValidatorChain::new().with(fails("bad"));
        assert_eq!(ready(validate_chain("x", &chain)), ValidatorResult::passed());
    }

    #[test]
    fn test_start_past_end_returns_initial_errors() {
        let chain = ValidatorChain::new().with(fails("bad"));
        let result = ready(validate_chain_from("x", &chain, 1, vec!["carried".into()]));
        assert_eq!(result, ValidatorResult::passed_with(vec!["carried".into()]));
    }

    #[test]
    fn test_initial_errors_dropped_after_failing_step() {
        let chain = ValidatorChain::new().with(fails("bad"));
        let result = ready(validate_chain_from("x", &chain, 0, vec!["carried".into()]));
        assert_eq!(result, ValidatorResult::passed());
    }

    #[test]
    fn test_deferred_step_makes_outcome_deferred() {
        let chain = ValidatorChain::new()
            .with(fails("bad"))
            .with(deferred_fn(|_: &str| async { ValidatorResult::failure("later") }))
            .with(clean());

        let outcome = validate_chain("x", &chain);
        assert!(outcome.is_deferred());
        assert_eq!(block_on(outcome.resolve()), ValidatorResult::passed());
    }

    #[test]
    fn test_deferred_clean_step_is_final() {
        let chain = ValidatorChain::new()
            .with(deferred_fn(|_: &str| async {
                ValidatorResult::passed_with(Vec::new())
            }))
            .with(fails("never reached"));

        assert_eq!(
            block_on(validate_chain("x", &chain).resolve()),
            ValidatorResult::passed()
        );
    }

    #[test]
    fn test_long_deferred_chain_runs_flat() {
        let chain: ValidatorChain<str> = (0..100_000)
            .map(|_| -> Box<dyn Validator<str>> {
                Box::new(deferred_fn(|_: &str| async { ValidatorResult::failure("again") }))
            })
            .collect();

        assert_eq!(
            block_on(validate_chain("x", &chain).resolve()),
            ValidatorResult::passed()
        );
    }

    #[test]
    fn test_deferred_then_ready_steps_interleave() {
        let chain = ValidatorChain::new()
            .with(deferred_fn(|_: &str| async { ValidatorResult::failure("first") }))
            .with(fails("second"))
            .with(deferred_fn(|_: &str| async { ValidatorResult::failure("third") }))
            .with(validator_fn(|_: &str| ValidatorResult::failed(Vec::<String>::new())))
            .with(fails("never reached"));

        assert_eq!(
            block_on(validate_chain("x", &chain).resolve()),
            ValidatorResult::failed(Vec::<String>::new())
        );
    }

    #[test]
    fn test_nested_chain() {
        let inner = ValidatorChain::new().with(fails("inner"));
        let outer = ValidatorChain::new().with(inner).with(fails("outer"));

        // inner chain ends valid with no errors, so the outer chain stops there
        assert_eq!(ready(validate_chain("x", &outer)), ValidatorResult::passed());
    }

    #[test]
    fn test_debug_lists_names() {
        let chain = ValidatorChain::new()
            .with(validator_fn(|_: &str| ValidatorResult::passed()).named("first"))
            .with(validator_fn(|_: &str| ValidatorResult::passed()).named("second"));
        assert_eq!(format!("{chain:?}"), r#"["first", "second"]"#);
    }
}
