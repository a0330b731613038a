//! EACH - validates every element of a slice with the same chain
//!
//! The element results are reported positionally under `items`. The
//! aggregate is valid iff every element is valid and carries no top-level
//! diagnostics. Elements are validated in index order, one after another,
//! with the same deferred handling as key validation: once an element
//! answers later, the remaining elements are awaited in one flat future.

use crate::combinators::chain::{ValidatorChain, validate_chain};
use crate::core::{Outcome, Validator, ValidatorResult};
use std::fmt;

// ============================================================================
// ITEM VALIDATOR
// ============================================================================

/// Runs one [`ValidatorChain`] against each element of a slice.
///
/// # Examples
///
/// ```rust
/// use concord_validator::combinators::{ItemValidator, ValidatorChain};
/// use concord_validator::core::{validator_fn, ValidatorResult};
///
/// let tags = ItemValidator::new(ValidatorChain::new().with(validator_fn(|tag: &String| {
///     if tag.is_empty() {
///         ValidatorResult {
///             valid: false,
///             errors: Vec::new(),
///             keys: None,
///             items: None,
///         }
///     } else {
///         ValidatorResult::passed()
///     }
/// })));
///
/// let input = vec!["rust".to_string(), String::new()];
/// let result = tags.validate(&input).into_ready().ok();
/// assert_eq!(result.map(|r| r.valid), Some(false));
/// ```
pub struct ItemValidator<T> {
    chain: ValidatorChain<T>,
}

impl<T> ItemValidator<T> {
    /// Creates an item validator running `chain` on every element.
    pub fn new(chain: ValidatorChain<T>) -> Self {
        Self { chain }
    }

    /// Returns the per-element chain.
    pub fn chain(&self) -> &ValidatorChain<T> {
        &self.chain
    }

    /// Extracts the per-element chain.
    pub fn into_inner(self) -> ValidatorChain<T> {
        self.chain
    }
}

impl<T: Sync> ItemValidator<T> {
    /// Validates every element of `items`.
    pub fn validate<'a>(&'a self, items: &'a [T]) -> Outcome<'a, ValidatorResult> {
        validate_each(items, &self.chain)
    }
}

impl<T> fmt::Debug for ItemValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemValidator")
            .field("chain", &self.chain)
            .finish()
    }
}

impl<T: Sync> Validator<[T]> for ItemValidator<T> {
    fn validate<'a>(&'a self, value: &'a [T]) -> Outcome<'a, ValidatorResult> {
        ItemValidator::validate(self, value)
    }

    fn name(&self) -> &str {
        "ItemValidator"
    }
}

fn validate_each<'a, T: Sync>(
    items: &'a [T],
    chain: &'a ValidatorChain<T>,
) -> Outcome<'a, ValidatorResult> {
    let mut results = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        tracing::trace!(index, "validating item");
        match validate_chain(item, chain) {
            Outcome::Ready(result) => results.push(result),
            Outcome::Deferred(pending) => {
                return Outcome::deferred(async move {
                    results.push(pending.await);
                    for (index, item) in items.iter().enumerate().skip(index + 1) {
                        tracing::trace!(index, "validating item");
                        results.push(validate_chain(item, chain).resolve().await);
                    }
                    aggregate(results)
                });
            }
        }
    }

    Outcome::ready(aggregate(results))
}

fn aggregate(results: Vec<ValidatorResult>) -> ValidatorResult {
    let result = ValidatorResult::from_items(results);
    tracing::debug!(valid = result.valid, "item validation finished");
    result
}

// ============================================================================
// ENTRY POINT
// ============================================================================

/// Binds a chain and returns the function that applies it to every element
/// of a slice.
pub fn validate_items<'a, T: Sync>(
    chain: &'a ValidatorChain<T>,
) -> impl Fn(&'a [T]) -> Outcome<'a, ValidatorResult> + 'a {
    move |items| validate_each(items, chain)
}

// ============================================================================
// TESTS
// ============================================================================
