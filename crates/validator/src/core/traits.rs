//! The validator capability
//!
//! A [`Validator`] maps a borrowed value to an [`Outcome`] of
//! [`ValidatorResult`]. Whether it answers immediately or later is invisible
//! to the chain and key validators that call it.

use crate::core::{Outcome, ValidatorResult};
use std::fmt;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every validator implements.
///
/// Validators receive the value by shared reference and therefore cannot
/// mutate it. Failure is reported through the returned result, never through
/// a panic or an error type.
///
/// # Examples
///
/// ```rust
/// use concord_validator::core::{Outcome, Validator, ValidatorResult};
///
/// struct MinLength {
///     min: usize,
/// }
///
/// impl Validator<str> for MinLength {
///     fn validate<'a>(&'a self, value: &'a str) -> Outcome<'a, ValidatorResult> {
///         if value.len() >= self.min {
///             Outcome::ready(ValidatorResult::passed())
///         } else {
///             Outcome::ready(ValidatorResult::failure(format!(
///                 "must be at least {} characters",
///                 self.min
///             )))
///         }
///     }
/// }
///
/// let result = MinLength { min: 3 }.validate("hi").into_ready().ok();
/// assert_eq!(result.map(|r| r.valid), Some(false));
/// ```
pub trait Validator<V: ?Sized>: Send + Sync {
    /// Validates the value, immediately or later.
    fn validate<'a>(&'a self, value: &'a V) -> Outcome<'a, ValidatorResult>;

    /// Name used in logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<V: ?Sized, T: Validator<V> + ?Sized> Validator<V> for Box<T> {
    fn validate<'a>(&'a self, value: &'a V) -> Outcome<'a, ValidatorResult> {
        (**self).validate(value)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<V: ?Sized, T: Validator<V> + ?Sized> Validator<V> for Arc<T> {
    fn validate<'a>(&'a self, value: &'a V) -> Outcome<'a, ValidatorResult> {
        (**self).validate(value)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<V: ?Sized, T: Validator<V> + ?Sized> Validator<V> for &T {
    fn validate<'a>(&'a self, value: &'a V) -> Outcome<'a, ValidatorResult> {
        (**self).validate(value)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

// ============================================================================
// CLOSURE ADAPTERS
// ============================================================================

/// A validator backed by a closure that answers immediately.
///
/// Created by [`validator_fn`].
pub struct FnValidator<V: ?Sized, F> {
    name: Option<String>,
    check: F,
    _phantom: PhantomData<fn(&V)>,
}

/// A validator backed by a closure that answers with a future.
///
/// Created by [`deferred_fn`]. The future must own what it needs; clone out
/// of the value before moving into the `async` block.
pub struct DeferredFn<V: ?Sized, F> {
    name: Option<String>,
    check: F,
    _phantom: PhantomData<fn(&V)>,
}

/// Wraps `Fn(&V) -> ValidatorResult` as a [`Validator`].
///
/// # Examples
///
/// ```rust
/// use concord_validator::core::{validator_fn, Validator, ValidatorResult};
///
/// let not_empty = validator_fn(|s: &str| {
///     if s.is_empty() {
///         ValidatorResult::failure("must not be empty")
///     } else {
///         ValidatorResult::passed()
///     }
/// });
/// assert!(not_empty.validate("x").is_ready());
/// ```
pub fn validator_fn<V, F>(check: F) -> FnValidator<V, F>
where
    V: ?Sized,
    F: Fn(&V) -> ValidatorResult + Send + Sync,
{
    FnValidator {
        name: None,
        check,
        _phantom: PhantomData,
    }
}

/// Wraps `Fn(&V) -> impl Future<Output = ValidatorResult>` as a [`Validator`].
///
/// # Examples
///
/// ```rust
/// use concord_validator::core::{deferred_fn, Validator, ValidatorResult};
///
/// let unique = deferred_fn(|name: &str| {
///     let name = name.to_owned();
///     async move {
///         if name == "taken" {
///             ValidatorResult::failure("already registered")
///         } else {
///             ValidatorResult::passed()
///         }
///     }
/// });
/// assert!(unique.validate("alice").is_deferred());
/// ```
pub fn deferred_fn<V, F, Fut>(check: F) -> DeferredFn<V, F>
where
    V: ?Sized,
    F: Fn(&V) -> Fut + Send + Sync,
    Fut: Future<Output = ValidatorResult> + Send + 'static,
{
    DeferredFn {
        name: None,
        check,
        _phantom: PhantomData,
    }
}

impl<V: ?Sized, F> FnValidator<V, F> {
    /// Sets the name reported in logs.
    #[must_use = "builder methods must be chained or built"]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl<V: ?Sized, F> DeferredFn<V, F> {
    /// Sets the name reported in logs.
    #[must_use = "builder methods must be chained or built"]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl<V, F> Validator<V> for FnValidator<V, F>
where
    V: ?Sized,
    F: Fn(&V) -> ValidatorResult + Send + Sync,
{
    fn validate<'a>(&'a self, value: &'a V) -> Outcome<'a, ValidatorResult> {
        Outcome::ready((self.check)(value))
    }

    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("validator_fn")
    }
}

impl<V, F, Fut> Validator<V> for DeferredFn<V, F>
where
    V: ?Sized,
    F: Fn(&V) -> Fut + Send + Sync,
    Fut: Future<Output = ValidatorResult> + Send + 'static,
{
    fn validate<'a>(&'a self, value: &'a V) -> Outcome<'a, ValidatorResult> {
        Outcome::deferred((self.check)(value))
    }

    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("deferred_fn")
    }
}

impl<V: ?Sized, F> fmt::Debug for FnValidator<V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnValidator")
            .field("name", &self.name)
            .field("check", &"<function>")
            .finish()
    }
}

impl<V: ?Sized, F> fmt::Debug for DeferredFn<V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredFn")
            .field("name", &self.name)
            .field("check", &"<function>")
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
