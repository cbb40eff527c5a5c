//! Error types for contract-checked functions.
//!
//! Predicates and validators never fail; they answer `true` or `false`.
//! Only [`CheckedFn::call`](crate::contracts::CheckedFn::call) returns errors.

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

/// The error type returned by contract-checked calls.
#[derive(Debug, Error)]
pub enum ContractError {
    /// The arguments were rejected before the function ran.
    #[error("{0}")]
    Precondition(#[from] PreconditionViolation),

    /// The function ran but its result was rejected.
    #[error("{0}")]
    Postcondition(#[from] PostconditionViolation),

    /// The result could not be represented as JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ContractError {
    /// Returns `true` for precondition violations.
    #[must_use]
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition(_))
    }

    /// Returns `true` for postcondition violations.
    #[must_use]
    pub fn is_postcondition(&self) -> bool {
        matches!(self, Self::Postcondition(_))
    }

    /// Name of the wrapped function, when the error is a violation.
    #[must_use]
    pub fn function(&self) -> Option<&str> {
        match self {
            Self::Precondition(err) => Some(&err.function),
            Self::Postcondition(err) => Some(&err.function),
            Self::Serialization(_) => None,
        }
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, Value> {
        let mut map = HashMap::new();

        match self {
            Self::Precondition(err) => {
                map.insert("type".to_string(), serde_json::json!("PreconditionViolation"));
                map.insert("function".to_string(), serde_json::json!(err.function));
                map.insert("arguments".to_string(), Value::Array(err.arguments.clone()));
            }
            Self::Postcondition(err) => {
                map.insert("type".to_string(), serde_json::json!("PostconditionViolation"));
                map.insert("function".to_string(), serde_json::json!(err.function));
                map.insert("arguments".to_string(), Value::Array(err.arguments.clone()));
                map.insert("result".to_string(), err.result.clone());
            }
            Self::Serialization(_) => {
                map.insert("type".to_string(), serde_json::json!("SerializationError"));
            }
        }

        map.insert("message".to_string(), serde_json::json!(self.to_string()));
        map
    }
}

impl From<serde_json::Error> for ContractError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Raised when a precondition rejects the argument list.
///
/// The wrapped function was not invoked.
#[derive(Debug, Clone, Error)]
#[error("arguments didn't match the precondition: {call}")]
pub struct PreconditionViolation {
    /// Name bound to the wrapped function, empty if anonymous.
    pub function: String,
    /// The rejected arguments in call order.
    pub arguments: Vec<Value>,
    /// Rendered call, e.g. `sum(0, 4)`.
    pub call: String,
}

impl PreconditionViolation {
    /// Creates a new precondition violation.
    #[must_use]
    pub fn new(function: impl Into<String>, arguments: Vec<Value>) -> Self {
        let function = function.into();
        let call = crate::contracts::render_call(&function, &arguments);
        Self {
            function,
            arguments,
            call,
        }
    }
}

/// Raised when a postcondition rejects the result.
///
/// The wrapped function has already run.
#[derive(Debug, Clone, Error)]
#[error("result didn't match the postcondition: {call} => {rendered_result}")]
pub struct PostconditionViolation {
    /// Name bound to the wrapped function, empty if anonymous.
    pub function: String,
    /// The arguments in call order.
    pub arguments: Vec<Value>,
    /// The rejected result.
    pub result: Value,
    /// Rendered call, e.g. `sum(2, 9)`.
    pub call: String,
    /// The result as JSON text.
    pub rendered_result: String,
}

impl PostconditionViolation {
    /// Creates a new postcondition violation.
    #[must_use]
    pub fn new(function: impl Into<String>, arguments: Vec<Value>, result: Value) -> Self {
        let function = function.into();
        let call = crate::contracts::render_call(&function, &arguments);
        let rendered_result = crate::contracts::render_json(&result);
        Self {
            function,
            arguments,
            result,
            call,
            rendered_result,
        }
    }
}
