//! # concord-validator
//!
//! Composable chain and per-field validation where any validator may answer
//! immediately or later.
//!
//! ## Quick Start
//!
//! ```rust
//! use concord_validator::prelude::*;
//!
//! struct Signup {
//!     username: String,
//!     tags: Vec<String>,
//! }
//!
//! let username: ValidatorChain<str> = chain![validator_fn(|name: &str| {
//!     if name.len() >= 3 {
//!         ValidatorResult::passed()
//!     } else {
//!         ValidatorResult::failure("too short")
//!     }
//! })];
//!
//! let tags: ValidatorChain<[String]> = chain![ItemValidator::new(chain![])];
//!
//! let rules = KeyValidator::new()
//!     .key("username", |s: &Signup| s.username.as_str(), username)
//!     .key("tags", |s: &Signup| s.tags.as_slice(), tags);
//!
//! let signup = Signup { username: "alice".into(), tags: vec!["rust".into()] };
//! let result = validate_keys(&rules)(&signup).into_ready().ok();
//! assert_eq!(result.map(|r| r.len()), Some(2));
//! ```
//!
//! ## Evaluation rules
//!
//! - A [`ValidatorChain`](combinators::ValidatorChain) runs its validators in
//!   order. A step that reports errors hands over to the next validator with
//!   an empty accumulator; the first step without errors is the answer.
//!   Running off the end yields a passing result.
//! - A [`KeyValidator`](combinators::KeyValidator) runs one chain per field
//!   in declaration order and returns exactly the configured keys.
//! - An [`ItemValidator`](combinators::ItemValidator) runs one chain per
//!   element and reports results positionally.
//!
//! Every entry point returns an [`Outcome`](core::Outcome): `Ready` when all
//! validators involved answered immediately, `Deferred` otherwise. Deferred
//! work is sequential; nothing is spawned.

pub mod combinators;
pub mod core;
#[cfg(feature = "serde")]
pub mod json;
mod macros;
pub mod prelude;
