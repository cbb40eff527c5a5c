//! Text rendering for violation messages.
//!
//! Arguments are shown the way a dynamic language prints them when joining
//! a list: strings unquoted, `null` as nothing, arrays comma-joined and
//! objects as `[object Object]`. Results are shown as compact JSON. In both
//! cases floats without a fractional part are written as integers, so `11.0`
//! renders as `11`.

use serde_json::{Number, Value};

/// Largest magnitude written in plain integer form.
const PLAIN_INTEGER_LIMIT: f64 = 1e21;

/// Renders `name(arg1, arg2, ...)`.
pub fn render_call(function: &str, arguments: &[Value]) -> String {
    let rendered: Vec<String> = arguments.iter().map(render_argument).collect();
    format!("{function}({})", rendered.join(", "))
}

/// Renders one argument in its natural string form.
pub fn render_argument(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => render_number(number),
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(render_argument)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Renders a value as compact JSON, keeping object fields in order.
pub fn render_json(value: &Value) -> String {
    match value {
        Value::Number(number) => render_number(number),
        Value::Array(items) => {
            let rendered: Vec<String> = items.iter().map(render_json).collect();
            format!("[{}]", rendered.join(","))
        }
        Value::Object(map) => {
            let rendered: Vec<String> = map
                .iter()
                .map(|(key, item)| format!("{}:{}", Value::from(key.as_str()), render_json(item)))
                .collect();
            format!("{{{}}}", rendered.join(","))
        }
        _ => value.to_string(),
    }
}

fn render_number(number: &Number) -> String {
    match number.as_f64() {
        Some(n) if !number.is_i64() && !number.is_u64() && is_plain_integer(n) => {
            if n == 0.0 {
                "0".to_string()
            } else {
                format!("{n:.0}")
            }
        }
        _ => number.to_string(),
    }
}

fn is_plain_integer(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0 && n.abs() < PLAIN_INTEGER_LIMIT
}
