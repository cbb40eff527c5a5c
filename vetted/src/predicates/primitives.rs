//! Primitive shape checks over JSON values.

use serde_json::{Number, Value};

/// Returns `true` for any JSON number.
pub fn is_number(value: &Value) -> bool {
    value.is_number()
}

/// Returns `true` for numbers without a fractional part.
///
/// Integral floats such as `1.0` count as integers.
pub fn is_integer(value: &Value) -> bool {
    value.as_number().is_some_and(is_integral)
}

/// Returns `true` for JSON strings.
pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

/// Returns `true` for `true` and `false`.
pub fn is_boolean(value: &Value) -> bool {
    value.is_boolean()
}

/// Returns `true` for `null`.
pub fn is_null(value: &Value) -> bool {
    value.is_null()
}

/// Returns `true` for JSON arrays.
pub fn is_array(value: &Value) -> bool {
    value.is_array()
}

/// Returns `true` for JSON objects.
pub fn is_object(value: &Value) -> bool {
    value.is_object()
}

pub(crate) fn is_integral(number: &Number) -> bool {
    if number.is_i64() || number.is_u64() {
        return true;
    }
    number
        .as_f64()
        .is_some_and(|n| n.is_finite() && n.fract() == 0.0)
}
