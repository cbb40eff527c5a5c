//! List (homogeneous JSON array) validation.

use serde_json::Value;

use super::Validator;
use crate::predicates::Predicate;

/// Builds a validator for arrays whose every element satisfies `predicate`.
///
/// Empty arrays are accepted. Non-arrays are rejected.
#[must_use]
pub fn validate_list<P>(predicate: P) -> Validator
where
    P: Predicate + 'static,
{
    Validator::new(move |value: &Value| {
        value
            .as_array()
            .is_some_and(|items| items.iter().all(|item| predicate.test(item)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::{is_number, is_string, PredicateExt};
    use serde_json::json;

    #[test]
    fn test_empty_list_accepted() {
        assert!(validate_list(is_number).is_valid(&json!([])));
    }

    #[test]
    fn test_every_element_checked() {
        let validator = validate_list(is_number);
        assert!(validator.is_valid(&json!([1, 1])));
        assert!(!validator.is_valid(&json!([1, "2"])));
    }

    #[test]
    fn test_mixed_elements_with_or() {
        let validator = validate_list(is_string.or(is_number));
        assert!(validator.is_valid(&json!(["a", 1, "b", 2.5])));
        assert!(!validator.is_valid(&json!(["a", null])));
    }

    #[test]
    fn test_non_array_rejected() {
        let validator = validate_list(is_number);
        assert!(!validator.is_valid(&json!(1)));
        assert!(!validator.is_valid(&json!({"0": 1})));
    }

    #[test]
    fn test_nested_validator_as_element_predicate() {
        let matrix = validate_list(validate_list(is_number));
        assert!(matrix.is_valid(&json!([[1, 2], [], [3]])));
        assert!(!matrix.is_valid(&json!([[1, 2], ["3"]])));
    }
}
