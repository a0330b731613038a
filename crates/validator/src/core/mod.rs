//! Core validation types and traits
//!
//! This module contains the building blocks every other module is written
//! against:
//!
//! - **Trait**: [`Validator`], plus the [`validator_fn`] / [`deferred_fn`]
//!   closure adapters
//! - **Results**: [`ValidatorResult`], [`KeyValidatorResult`]
//! - **Deferred values**: [`Outcome`]
//! - **Errors**: [`ValidationFailure`]
//!
//! # Architecture
//!
//! ## 1. Outcomes are data
//!
//! A validator never fails with an error. It reports `valid` and a list of
//! diagnostics; [`ValidatorResult::check`] converts that into a `Result`
//! only when the caller asks for one.
//!
//! ## 2. One code path for sync and async
//!
//! Validators answer with an [`Outcome`], which is either `Ready` or
//! `Deferred`. Composition uses [`Outcome::then`], so chains and key
//! validators are written once. When every validator is immediate the whole
//! run stays synchronous:
//!
//! ```rust
//! use concord_validator::core::{validator_fn, Validator, ValidatorResult};
//!
//! let positive = validator_fn(|n: &i64| {
//!     if *n > 0 {
//!         ValidatorResult::passed()
//!     } else {
//!         ValidatorResult::failure("must be positive")
//!     }
//! });
//!
//! let result = positive.validate(&5).into_ready().ok();
//! assert_eq!(result, Some(ValidatorResult::passed()));
//! ```

pub mod error;
pub mod outcome;
pub mod result;
pub mod traits;

pub use error::ValidationFailure;
pub use outcome::Outcome;
pub use result::{KeyValidatorResult, ValidatorResult};
pub use traits::{DeferredFn, FnValidator, Validator, deferred_fn, validator_fn};
