//! Basic usage example for concord-validator

use concord_validator::prelude::*;

fn main() {
    // A chain keeps going while validators report errors and stops at the
    // first one that does not.
    let username: ValidatorChain<str> = chain![
        validator_fn(|name: &str| {
            if name.len() < 3 {
                ValidatorResult::failure("shorter than 3 characters")
            } else {
                ValidatorResult::passed()
            }
        }),
        validator_fn(|name: &str| {
            if name.chars().all(char::is_alphanumeric) {
                ValidatorResult::passed()
            } else {
                ValidatorResult::failed(Vec::<String>::new())
            }
        }),
    ];

    for name in ["ferris", "x", "no spaces"] {
        match validate_chain(name, &username).into_ready() {
            Ok(result) => println!("{name:?}: valid={} errors={:?}", result.valid, result.errors),
            Err(_) => println!("{name:?}: answered later"),
        }
    }
}
