//! Key validation over `serde_json::Value` objects.
//!
//! A JSON object has no fixed shape, so fields are looked up by name. A key
//! that is missing, or a value that is not an object at all, is validated as
//! `null`. The result still holds exactly the configured keys.
//!
//! # Examples
//!
//! ```
//! use concord_validator::combinators::{KeyValidator, ValidatorChain};
//! use concord_validator::core::{validator_fn, ValidatorResult};
//! use serde_json::{Value, json};
//!
//! let rules = KeyValidator::<Value>::new()
//!     .json_key("email", ValidatorChain::new().with(validator_fn(|v: &Value| {
//!         if v.is_string() {
//!             ValidatorResult::passed()
//!         } else {
//!             ValidatorResult::failure("expected a string")
//!         }
//!     })))
//!     .json_key("age", ValidatorChain::new());
//!
//! let payload = json!({ "email": "a@b.c" });
//! let result = rules.validate(&payload).into_ready().ok();
//! assert_eq!(result.map(|r| r.len()), Some(2));
//! ```

use crate::combinators::{KeyValidator, ValidatorChain};
use serde_json::Value;
use std::borrow::Cow;

static NULL: Value = Value::Null;

/// Returns the field `key` of a JSON object, or `null` when there is none.
pub fn json_field<'a>(object: &'a Value, key: &str) -> &'a Value {
    object.get(key).unwrap_or(&NULL)
}

impl KeyValidator<Value> {
    /// Declares a field of a JSON object, looked up by `key`.
    #[must_use = "builder methods must be chained or built"]
    pub fn json_key(self, key: impl Into<Cow<'static, str>>, chain: ValidatorChain<Value>) -> Self {
        let key = key.into();
        let lookup = key.clone();
        self.key(
            key,
            move |object: &Value| json_field(object, &lookup),
            chain,
        )
    }
}
