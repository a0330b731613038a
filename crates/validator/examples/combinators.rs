//! Mixing immediate and deferred validators across fields.
//!
//! Run with `RUST_LOG=concord_validator=trace` to see each step.

use concord_validator::prelude::*;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

struct Signup {
    email: String,
    tags: Vec<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let email: ValidatorChain<str> = chain![
        validator_fn(|email: &str| {
            if email.contains('@') {
                ValidatorResult::passed()
            } else {
                ValidatorResult::failed(Vec::<String>::new())
            }
        }),
        // Only reached when the previous step reports errors.
        deferred_fn(|email: &str| {
            let email = email.to_owned();
            async move {
                tokio::time::sleep(Duration::from_millis(20)).await;
                ValidatorResult::failure(format!("{email} is already registered"))
            }
        }),
    ];

    let tags: ValidatorChain<[String]> = chain![ItemValidator::new(chain![validator_fn(
        |tag: &String| {
            if tag.is_empty() {
                ValidatorResult::failed(Vec::<String>::new())
            } else {
                ValidatorResult::passed()
            }
        }
    )])];

    let rules = KeyValidator::new()
        .key("email", |s: &Signup| s.email.as_str(), email)
        .key("tags", |s: &Signup| s.tags.as_slice(), tags);

    let signup = Signup {
        email: "ferris@rust-lang.org".into(),
        tags: vec!["rust".into(), String::new()],
    };

    let outcome = validate_keys(&rules)(&signup);
    println!("answered immediately: {}", outcome.is_ready());

    let result = outcome.await;
    for (key, field) in &result {
        println!("{key}: valid={}", field.valid);
    }
    if let Err(failure) = result.check() {
        for line in failure.messages() {
            println!("  {line}");
        }
    }
}
