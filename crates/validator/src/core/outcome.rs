//! Ready-or-deferred values
//!
//! Every validator, chain and key validator in this crate answers with an
//! [`Outcome`]: either the value is available right away, or it arrives later
//! through a boxed future. Composition goes through [`Outcome::then`] and
//! [`Outcome::map`], so the same code handles both cases:
//!
//! - ready + ready stays ready and never touches an executor
//! - anything deferred collapses into a single deferred outcome
//!
//! # Examples
//!
//! ```rust
//! use concord_validator::core::Outcome;
//!
//! let doubled = Outcome::ready(21).map(|n| n * 2);
//! assert_eq!(doubled.into_ready().ok(), Some(42));
//!
//! let later = Outcome::deferred(async { 21 }).map(|n| n * 2);
//! assert!(later.is_deferred());
//! assert_eq!(futures::executor::block_on(later.resolve()), 42);
//! ```

use futures::FutureExt;
use futures::future::BoxFuture;
use std::fmt;
use std::future::{Future, IntoFuture};

// ============================================================================
// OUTCOME
// ============================================================================

/// A value that is either available now or produced later, exactly once.
#[must_use = "an outcome does nothing until it is inspected or awaited"]
pub enum Outcome<'a, T> {
    /// The value is available immediately.
    Ready(T),
    /// The value is produced by a future.
    Deferred(BoxFuture<'a, T>),
}

impl<'a, T> Outcome<'a, T>
where
    T: Send + 'a,
{
    /// Wraps an immediately available value.
    pub fn ready(value: T) -> Self {
        Self::Ready(value)
    }

    /// Wraps a future producing the value later.
    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'a,
    {
        Self::Deferred(future.boxed())
    }

    /// Returns `true` if the value is available without awaiting.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Returns `true` if the value still has to be awaited.
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }

    /// Transforms the value once it is available.
    pub fn map<U, F>(self, f: F) -> Outcome<'a, U>
    where
        U: Send + 'a,
        F: FnOnce(T) -> U + Send + 'a,
    {
        match self {
            Self::Ready(value) => Outcome::Ready(f(value)),
            Self::Deferred(future) => Outcome::Deferred(future.map(f).boxed()),
        }
    }

    /// Continues with another outcome once the value is available.
    ///
    /// When `self` is ready, `f` runs immediately and its outcome is returned
    /// as is. When `self` is deferred, `f` is not called until the future
    /// resolves, and the result is a single deferred outcome.
    pub fn then<U, F>(self, f: F) -> Outcome<'a, U>
    where
        U: Send + 'a,
        F: FnOnce(T) -> Outcome<'a, U> + Send + 'a,
    {
        match self {
            Self::Ready(value) => f(value),
            Self::Deferred(future) => {
                Outcome::Deferred(async move { f(future.await).resolve().await }.boxed())
            }
        }
    }

    /// Waits for the value.
    pub async fn resolve(self) -> T {
        match self {
            Self::Ready(value) => value,
            Self::Deferred(future) => future.await,
        }
    }

    /// Takes the value if it is already available, otherwise hands the
    /// outcome back unchanged.
    pub fn into_ready(self) -> Result<T, Self> {
        match self {
            Self::Ready(value) => Ok(value),
            deferred @ Self::Deferred(_) => Err(deferred),
        }
    }
}

impl<'a, T> IntoFuture for Outcome<'a, T>
where
    T: Send + 'a,
{
    type Output = T;
    type IntoFuture = BoxFuture<'a, T>;

    fn into_future(self) -> Self::IntoFuture {
        match self {
            Self::Ready(value) => futures::future::ready(value).boxed(),
            Self::Deferred(future) => future,
        }
    }
}

impl<T> From<T> for Outcome<'_, T> {
    fn from(value: T) -> Self {
        Self::Ready(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Outcome<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(value) => f.debug_tuple("Ready").field(value).finish(),
            Self::Deferred(_) => f.debug_tuple("Deferred").field(&"<future>").finish(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_ready_map_stays_ready() {
        let outcome = Outcome::ready(2).map(|n| n + 1);
        assert!(outcome.is_ready());
        assert_eq!(outcome.into_ready().ok(), Some(3));
    }

    #[test]
    fn test_then_ready_into_deferred() {
        let outcome = Outcome::ready(2).then(|n| Outcome::deferred(async move { n * 10 }));
        assert!(outcome.is_deferred());
        assert_eq!(block_on(outcome.resolve()), 20);
    }

    #[test]
    fn test_then_deferred_into_ready() {
        let outcome = Outcome::deferred(async { 2 }).then(|n| Outcome::ready(n * 10));
        assert!(outcome.is_deferred());
        assert_eq!(block_on(outcome.resolve()), 20);
    }

    #[test]
    fn test_then_deferred_into_deferred() {
        let outcome =
            Outcome::deferred(async { 2 }).then(|n| Outcome::deferred(async move { n * 10 }));
        assert_eq!(block_on(outcome.resolve()), 20);
    }

    #[test]
    fn test_then_is_lazy_when_deferred() {
        let mut called = false;
        let outcome = Outcome::deferred(async { 1 }).then(|n| {
            called = true;
            Outcome::ready(n)
        });
        drop(outcome);
        assert!(!called);
    }

    #[test]
    fn test_into_ready_returns_deferred_back() {
        let outcome = Outcome::deferred(async { 7 });
        let back = outcome.into_ready().unwrap_err();
        assert_eq!(block_on(back.resolve()), 7);
    }

    #[tokio::test]
    async fn test_outcome_is_awaitable() {
        assert_eq!(Outcome::ready(5).await, 5);
        assert_eq!(Outcome::deferred(async { 6 }).await, 6);
    }

    #[test]
    fn test_debug_hides_future() {
        let debug = format!("{:?}", Outcome::deferred(async { 1 }));
        assert!(debug.contains("Deferred"));
        assert_eq!(format!("{:?}", Outcome::ready(1)), "Ready(1)");
    }
}
