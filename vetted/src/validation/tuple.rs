//! Tuple (fixed-length JSON array) validation.

use serde_json::Value;
use tracing::trace;

use super::Validator;
use crate::predicates::BoxedPredicate;

/// One predicate per tuple position.
pub type TupleValidation = Vec<BoxedPredicate>;

/// Builds a validator for arrays of exactly `validation.len()` elements.
///
/// Rejects non-arrays and arrays of a different length; otherwise every
/// element must satisfy the predicate at its position.
///
/// ```
/// use vetted::predicates::{is_number, is_string, PredicateExt};
/// use vetted::validation::validate_tuple;
/// use serde_json::json;
///
/// let pair = validate_tuple(vec![is_number.boxed(), is_string.boxed()]);
/// assert!(pair.is_valid(&json!([1, "2"])));
/// assert!(!pair.is_valid(&json!(["2", 1])));
/// ```
#[must_use]
pub fn validate_tuple(validation: TupleValidation) -> Validator {
    Validator::new(move |value: &Value| {
        let Some(items) = value.as_array() else {
            return false;
        };
        if items.len() != validation.len() {
            trace!(
                expected = validation.len(),
                actual = items.len(),
                "tuple length mismatch"
            );
            return false;
        }
        validation
            .iter()
            .zip(items)
            .all(|(predicate, item)| predicate.test(item))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::{boxed, is_number, is_string, PredicateExt};
    use serde_json::json;

    #[test]
    fn test_empty_tuple() {
        let validator = validate_tuple(Vec::new());
        assert!(validator.is_valid(&json!([])));
        assert!(!validator.is_valid(&json!([1])));
    }

    #[test]
    fn test_positional_predicates() {
        let validator = validate_tuple(vec![boxed(is_number), boxed(is_string)]);
        assert!(validator.is_valid(&json!([1, "2"])));
        assert!(!validator.is_valid(&json!([1, 2])));
    }

    #[test]
    fn test_swapped_predicates_reject() {
        let validator = validate_tuple(vec![is_string.boxed(), is_number.boxed()]);
        assert!(!validator.is_valid(&json!([1, "2"])));
    }

    #[test]
    fn test_length_mismatch() {
        let validator = validate_tuple(vec![boxed(is_number), boxed(is_number)]);
        assert!(!validator.is_valid(&json!([1])));
        assert!(!validator.is_valid(&json!([1, 2, 3])));
    }

    #[test]
    fn test_non_array_rejected() {
        let validator = validate_tuple(Vec::new());
        assert!(!validator.is_valid(&json!({})));
        assert!(!validator.is_valid(&json!(null)));
    }
}
