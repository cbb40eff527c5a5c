//! Ready-made validators for common shapes.

use serde::{Deserialize, Serialize};

use super::{validate_list, validate_record, validate_tuple, RecordValidation, Validator};
use crate::predicates::{is_in_range, is_number, is_string, PredicateExt, MAX_SAFE_INTEGER};

/// A non-negative counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    /// Current count.
    pub count: u64,
}

/// Accepts `{"count": n}` where `n` is a number in `0..=MAX_SAFE_INTEGER`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn counter() -> Validator<Counter> {
    validate_record(
        RecordValidation::new().field(
            "count",
            is_number.and(is_in_range(0.0, MAX_SAFE_INTEGER as f64)),
        ),
    )
    .narrow()
}

/// Accepts `[number, string]`.
#[must_use]
pub fn number_string_tuple() -> Validator<(f64, String)> {
    validate_tuple(vec![is_number.boxed(), is_string.boxed()]).narrow()
}

/// Accepts arrays of numbers of any length.
#[must_use]
pub fn number_list() -> Validator<Vec<f64>> {
    validate_list(is_number).narrow()
}
