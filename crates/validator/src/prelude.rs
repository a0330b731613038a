//! Prelude module for convenient imports.
//!
//! Provides a single `use concord_validator::prelude::*;` import that brings
//! in the validator trait, result types, the deferred outcome and every
//! composition entry point.
//!
//! # Examples
//!
//! ```rust
//! use concord_validator::prelude::*;
//!
//! let chain: ValidatorChain<str> = chain![validator_fn(|_: &str| ValidatorResult::passed())];
//! assert!(validate_chain("x", &chain).is_ready());
//! ```

// ============================================================================
// CORE: trait, results, outcome, failure
// ============================================================================

pub use crate::core::{
    DeferredFn, FnValidator, KeyValidatorResult, Outcome, ValidationFailure, Validator,
    ValidatorResult, deferred_fn, validator_fn,
};

// ============================================================================
// COMBINATORS: chains, keys, items
// ============================================================================

pub use crate::combinators::{
    ItemValidator, KeyValidator, ValidatorChain, validate_chain, validate_chain_from,
    validate_items, validate_keys,
};

pub use crate::chain;

// ============================================================================
// SERDE-GATED: JSON object fields
// ============================================================================

#[cfg(feature = "serde")]
pub use crate::json::json_field;
