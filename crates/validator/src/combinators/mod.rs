//! Composition of validators
//!
//! - [`chain`]: an ordered list of validators run against one value
//! - [`keys`]: one chain per field of a structured value
//! - [`each`]: one chain applied to every element of a slice
//!
//! All three answer with an [`Outcome`](crate::core::Outcome) and stay
//! synchronous as long as every validator involved is.

pub mod chain;
pub mod each;
pub mod keys;

pub use chain::{ValidatorChain, validate_chain, validate_chain_from};
pub use each::{ItemValidator, validate_items};
pub use keys::{KeyValidator, validate_keys};
