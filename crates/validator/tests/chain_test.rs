//! Integration tests for chain evaluation.

use concord_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::sync::{Arc, Mutex};

// ============================================================================
// HELPERS
// ============================================================================

type Calls = Arc<Mutex<Vec<usize>>>;

/// A validator that records its position and answers with `answer`.
fn step(position: usize, calls: &Calls, answer: ValidatorResult) -> impl Validator<str> + 'static {
    let calls = Arc::clone(calls);
    validator_fn(move |_: &str| {
        calls.lock().unwrap().push(position);
        answer.clone()
    })
}

fn resolve(outcome: Outcome<'_, ValidatorResult>) -> ValidatorResult {
    futures::executor::block_on(outcome.resolve())
}

// ============================================================================
// TERMINATION
// ============================================================================

#[test]
fn empty_chain_passes_any_value() {
    let chain: ValidatorChain<str> = chain![];
    for value in ["", "anything", "  "] {
        assert_eq!(
            validate_chain(value, &chain).into_ready().unwrap(),
            ValidatorResult::passed()
        );
    }
}

#[test]
fn stops_at_first_step_without_errors() {
    let calls = Calls::default();
    let chain: ValidatorChain<str> = chain![
        step(0, &calls, ValidatorResult::failure("first")),
        step(1, &calls, ValidatorResult::passed()),
        step(2, &calls, ValidatorResult::failure("never reached")),
    ];

    let result = validate_chain("v", &chain).into_ready().unwrap();

    assert_eq!(result, ValidatorResult::passed());
    assert_eq!(*calls.lock().unwrap(), vec![0, 1]);
}

#[test]
fn trailing_failure_yields_pass_with_no_errors() {
    let calls = Calls::default();
    let chain: ValidatorChain<str> = chain![
        step(0, &calls, ValidatorResult::failure("a")),
        step(1, &calls, ValidatorResult::failed(["b", "c"])),
    ];

    let result = validate_chain("v", &chain).into_ready().unwrap();

    assert_eq!(result, ValidatorResult::passed());
    assert_eq!(*calls.lock().unwrap(), vec![0, 1]);
}

#[rstest]
#[case::invalid_without_errors(ValidatorResult::failed(Vec::<String>::new()))]
#[case::valid(ValidatorResult::passed())]
#[case::valid_with_keys(ValidatorResult::from_keys(KeyValidatorResult::new()))]
fn step_without_errors_is_returned_verbatim(#[case] answer: ValidatorResult) {
    let calls = Calls::default();
    let chain: ValidatorChain<str> = chain![
        step(0, &calls, answer.clone()),
        step(1, &calls, ValidatorResult::failure("unreachable")),
    ];

    assert_eq!(validate_chain("v", &chain).into_ready().unwrap(), answer);
    assert_eq!(*calls.lock().unwrap(), vec![0]);
}

#[rstest]
#[case(0, vec![0, 1])]
#[case(1, vec![1])]
#[case(2, vec![])]
#[case(7, vec![])]
fn resumes_from_start_index(#[case] start: usize, #[case] expected_calls: Vec<usize>) {
    let calls = Calls::default();
    let chain: ValidatorChain<str> = chain![
        step(0, &calls, ValidatorResult::failure("a")),
        step(1, &calls, ValidatorResult::failure("b")),
    ];

    let result = validate_chain_from("v", &chain, start, vec!["carried".into()])
        .into_ready()
        .unwrap();

    assert!(result.valid);
    assert_eq!(*calls.lock().unwrap(), expected_calls);
}

#[test]
fn initial_errors_survive_an_exhausted_range() {
    let chain: ValidatorChain<str> = chain![];
    let result = validate_chain_from("v", &chain, 0, vec!["carried".into()])
        .into_ready()
        .unwrap();

    assert_eq!(result, ValidatorResult::passed_with(vec!["carried".into()]));
}

// ============================================================================
// DEFERRED STEPS
// ============================================================================

#[test]
fn deferred_step_produces_same_result_as_immediate() {
    let immediate: ValidatorChain<str> = chain![
        validator_fn(|_: &str| ValidatorResult::failure("a")),
        validator_fn(|_: &str| ValidatorResult::failure("b").with_error("c")),
        validator_fn(|_: &str| ValidatorResult::passed_with(Vec::new())),
    ];
    let deferred: ValidatorChain<str> = chain![
        validator_fn(|_: &str| ValidatorResult::failure("a")),
        deferred_fn(|_: &str| async { ValidatorResult::failure("b").with_error("c") }),
        validator_fn(|_: &str| ValidatorResult::passed_with(Vec::new())),
    ];

    let ready = validate_chain("v", &immediate);
    let later = validate_chain("v", &deferred);

    assert!(ready.is_ready());
    assert!(later.is_deferred());
    assert_eq!(resolve(ready), resolve(later));
}

#[test]
fn steps_after_a_deferred_one_wait_for_it() {
    let calls = Calls::default();
    let chain: ValidatorChain<str> = chain![
        deferred_fn(|_: &str| async { ValidatorResult::failure("pending") }),
        step(1, &calls, ValidatorResult::passed()),
    ];

    let outcome = validate_chain("v", &chain);
    assert!(calls.lock().unwrap().is_empty());

    assert_eq!(resolve(outcome), ValidatorResult::passed());
    assert_eq!(*calls.lock().unwrap(), vec![1]);
}

// ============================================================================
// CHAINS AS VALIDATORS
// ============================================================================

#[test]
fn chain_nested_in_chain_acts_as_one_step() {
    let inner: ValidatorChain<str> = chain![validator_fn(|_: &str| ValidatorResult::failure("inner"))];
    let outer: ValidatorChain<str> = chain![
        inner,
        validator_fn(|_: &str| ValidatorResult::failure("outer")),
    ];

    // The inner chain runs off its end and reports a clean pass, which stops the outer chain.
    assert_eq!(
        validate_chain("v", &outer).into_ready().unwrap(),
        ValidatorResult::passed()
    );
}

#[test]
fn validated_value_is_not_modified() {
    let chain: ValidatorChain<Vec<u8>> = chain![
        validator_fn(|bytes: &Vec<u8>| ValidatorResult::failure(format!("{} bytes", bytes.len()))),
    ];
    let value = vec![1u8, 2, 3];
    let before = value.clone();

    let _ = validate_chain(&value, &chain);

    assert_eq!(value, before);
}
