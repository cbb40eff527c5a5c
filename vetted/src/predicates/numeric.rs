//! Numeric predicates.

use serde_json::Value;

use super::primitives::is_integral;

/// Largest integer that survives a round trip through an `f64` (2^53 - 1).
pub const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_991;

/// Returns `true` for numbers with a fractional part.
pub fn is_float(value: &Value) -> bool {
    value.as_number().is_some_and(|number| !is_integral(number))
}

/// Builds a predicate accepting numbers in `min..=max`.
///
/// Both bounds are inclusive. Values that are not numbers are rejected.
pub fn is_in_range(min: f64, max: f64) -> impl Fn(&Value) -> bool + Send + Sync + Copy {
    move |value: &Value| value.as_f64().is_some_and(|n| min <= n && n <= max)
}
