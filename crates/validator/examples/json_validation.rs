//! Validating a `serde_json::Value` configuration object.

use concord_validator::prelude::*;
use serde_json::{Value, json};

fn required_string() -> impl Validator<Value> + 'static {
    validator_fn(|value: &Value| match value {
        Value::String(s) if !s.is_empty() => ValidatorResult::passed(),
        Value::Null => ValidatorResult::failed(["missing"]),
        _ => ValidatorResult::failed(Vec::<String>::new()),
    })
}

fn port() -> impl Validator<Value> + 'static {
    validator_fn(|value: &Value| match value.as_u64() {
        Some(port) if (1..=u64::from(u16::MAX)).contains(&port) => ValidatorResult::passed(),
        _ => ValidatorResult::failed(Vec::<String>::new()),
    })
}

fn main() {
    let server = KeyValidator::<Value>::new()
        .json_key("host", chain![required_string()])
        .json_key("port", chain![port()]);
    let rules = KeyValidator::<Value>::new()
        .json_key("name", chain![required_string()])
        .json_key("server", chain![server]);

    let configs = [
        json!({ "name": "api", "server": { "host": "0.0.0.0", "port": 8080 } }),
        json!({ "name": "", "server": { "port": 0 } }),
    ];

    for config in &configs {
        let result = validate_keys(&rules)(config)
            .into_ready()
            .unwrap_or_else(|_| unreachable!("all validators answer immediately"));

        println!("{config}");
        match serde_json::to_string_pretty(&result) {
            Ok(report) => println!("{report}"),
            Err(e) => println!("cannot render report: {e}"),
        }
        if let Err(failure) = result.check() {
            println!("{failure}: {:?}", failure.messages());
        }
    }
}
