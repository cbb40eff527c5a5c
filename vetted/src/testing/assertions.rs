//! Test assertions for predicates and checked calls.

use std::fmt::Debug;

use serde_json::Value;

use crate::errors::ContractError;
use crate::predicates::Predicate;

/// Asserts that the predicate accepts the value.
pub fn assert_accepts<P: Predicate + ?Sized>(predicate: &P, value: &Value) {
    assert!(
        predicate.test(value),
        "Expected value to be accepted, but it was rejected: {value}"
    );
}

/// Asserts that the predicate rejects the value.
pub fn assert_rejects<P: Predicate + ?Sized>(predicate: &P, value: &Value) {
    assert!(
        !predicate.test(value),
        "Expected value to be rejected, but it was accepted: {value}"
    );
}

/// Asserts that a checked call failed its precondition with `message`.
pub fn assert_precondition_violation<R: Debug>(result: &Result<R, ContractError>, message: &str) {
    match result {
        Err(err @ ContractError::Precondition(_)) => assert_eq!(
            err.to_string(),
            message,
            "Precondition violation message mismatch"
        ),
        other => panic!("Expected precondition violation, got {other:?}"),
    }
}

/// Asserts that a checked call failed its postcondition with `message`.
pub fn assert_postcondition_violation<R: Debug>(result: &Result<R, ContractError>, message: &str) {
    match result {
        Err(err @ ContractError::Postcondition(_)) => assert_eq!(
            err.to_string(),
            message,
            "Postcondition violation message mismatch"
        ),
        other => panic!("Expected postcondition violation, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{PostconditionViolation, PreconditionViolation};
    use crate::predicates::{is_number, is_string};
    use serde_json::json;

    #[test]
    fn test_assert_accepts() {
        assert_accepts(&is_number, &json!(1));
    }

    #[test]
    #[should_panic(expected = "Expected value to be accepted")]
    fn test_assert_accepts_fails() {
        assert_accepts(&is_number, &json!("1"));
    }

    #[test]
    fn test_assert_rejects() {
        assert_rejects(&is_string, &json!(1));
    }

    #[test]
    fn test_assert_precondition_violation() {
        let result: Result<i64, ContractError> =
            Err(PreconditionViolation::new("f", vec![json!(1)]).into());
        assert_precondition_violation(&result, "arguments didn't match the precondition: f(1)");
    }

    #[test]
    #[should_panic(expected = "Expected precondition violation")]
    fn test_assert_precondition_violation_on_success() {
        let result: Result<i64, ContractError> = Ok(1);
        assert_precondition_violation(&result, "");
    }

    #[test]
    #[should_panic(expected = "Expected postcondition violation")]
    fn test_assert_postcondition_violation_wrong_kind() {
        let result: Result<i64, ContractError> =
            Err(PreconditionViolation::new("f", vec![]).into());
        assert_postcondition_violation(&result, "");
    }

    #[test]
    fn test_assert_postcondition_violation() {
        let result: Result<i64, ContractError> =
            Err(PostconditionViolation::new("f", vec![], json!(null)).into());
        assert_postcondition_violation(&result, "result didn't match the postcondition: f() => null");
    }
}
