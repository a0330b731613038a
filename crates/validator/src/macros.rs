//! Macros for building chains with minimal boilerplate.
//!
//! - [`chain!`] — build a [`ValidatorChain`](crate::combinators::ValidatorChain)
//!   from a list of validators
//!
//! # Examples
//!
//! ```rust
//! use concord_validator::chain;
//! use concord_validator::combinators::ValidatorChain;
//! use concord_validator::core::{validator_fn, ValidatorResult};
//!
//! let names: ValidatorChain<str> = chain![
//!     validator_fn(|s: &str| ValidatorResult::failure(format!("{s} is taken"))),
//!     validator_fn(|_: &str| ValidatorResult::passed()),
//! ];
//! assert_eq!(names.len(), 2);
//! ```

// ============================================================================
// CHAIN MACRO
// ============================================================================

/// Builds a `ValidatorChain` from validators, in the order given.
///
/// `chain![]` is an empty chain.
#[macro_export]
macro_rules! chain {
    () => {
        $crate::combinators::ValidatorChain::new()
    };
    ($($validator:expr),+ $(,)?) => {
        $crate::combinators::ValidatorChain::new()$(.with($validator))+
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::combinators::ValidatorChain;
    use crate::core::{ValidatorResult, validator_fn};

    #[test]
    fn test_empty_chain_macro() {
        let chain: ValidatorChain<i32> = chain![];
        assert!(chain.is_empty());
    }

    #[test]
    fn test_chain_macro_keeps_order() {
        let chain: ValidatorChain<i32> = chain![
            validator_fn(|_: &i32| ValidatorResult::passed()).named("one"),
            validator_fn(|_: &i32| ValidatorResult::passed()).named("two"),
            validator_fn(|_: &i32| ValidatorResult::passed()).named("three"),
        ];

        let names: Vec<_> = chain.iter().map(|v| v.name().to_owned()).collect();
        assert_eq!(names, vec!["one", "two", "three"]);
    }
}
