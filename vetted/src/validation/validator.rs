//! The [`Validator`] type shared by the structural validators.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::predicates::{BoxedPredicate, Predicate};

/// A cloneable predicate produced by the structural validators.
///
/// `T` names the shape an accepted value is known to have. It is a
/// compile-time tag only: nothing about `T` is checked at runtime, and
/// accepting a value never converts it.
pub struct Validator<T = Value> {
    predicate: BoxedPredicate,
    _marker: PhantomData<fn() -> T>,
}

impl Validator {
    /// Wraps a predicate.
    #[must_use]
    pub fn new<P>(predicate: P) -> Self
    where
        P: Predicate + 'static,
    {
        Self {
            predicate: crate::predicates::boxed(predicate),
            _marker: PhantomData,
        }
    }
}

impl<T> Validator<T> {
    /// Re-tags the narrowed type without changing behaviour.
    #[must_use]
    pub fn narrow<U>(self) -> Validator<U> {
        Validator {
            predicate: self.predicate,
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the value is accepted.
    pub fn is_valid(&self, value: &Value) -> bool {
        self.predicate.test(value)
    }

    /// Returns a [`Validated`] handle if the value is accepted.
    pub fn validate<'a>(&self, value: &'a Value) -> Option<Validated<'a, T>> {
        self.is_valid(value).then_some(Validated {
            value,
            _marker: PhantomData,
        })
    }
}

impl<T> Clone for Validator<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> Predicate for Validator<T> {
    fn test(&self, value: &Value) -> bool {
        self.is_valid(value)
    }
}

impl<T> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("narrows_to", &std::any::type_name::<T>())
            .finish()
    }
}

/// A value that a [`Validator<T>`] accepted.
pub struct Validated<'a, T> {
    value: &'a Value,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T> Validated<'a, T> {
    /// The accepted value, unchanged.
    #[must_use]
    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// Deserializes the accepted value into `T`.
    ///
    /// Acceptance does not guarantee this succeeds; `T` is whatever the
    /// validator was narrowed to.
    pub fn deserialize(&self) -> Result<T, serde_json::Error>
    where
        T: DeserializeOwned,
    {
        serde_json::from_value(self.value.clone())
    }
}

impl<T> fmt::Debug for Validated<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Validated").field(self.value).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::{is_number, is_string};
    use serde_json::json;

    #[test]
    fn test_validator_wraps_predicate() {
        let validator = Validator::new(is_string);
        assert!(validator.is_valid(&json!("a")));
        assert!(!validator.is_valid(&json!(1)));
    }

    #[test]
    fn test_validator_is_predicate() {
        let validator = Validator::new(is_number);
        let as_predicate: &dyn Predicate = &validator;
        assert!(as_predicate.test(&json!(3)));
    }

    #[test]
    fn test_validate_returns_handle_on_success() {
        let validator = Validator::new(is_number).narrow::<f64>();
        let value = json!(2.5);

        let validated = validator.validate(&value).expect("accepted");
        assert_eq!(validated.value(), &json!(2.5));
        assert!((validated.deserialize().unwrap() - 2.5).abs() < f64::EPSILON);

        assert!(validator.validate(&json!("2.5")).is_none());
    }

    #[test]
    fn test_narrowing_is_not_checked() {
        // is_number accepts 2.5, which does not fit a u8.
        let validator = Validator::new(is_number).narrow::<u8>();
        let value = json!(2.5);
        let validated = validator.validate(&value).expect("accepted");
        assert!(validated.deserialize().is_err());
    }

    #[test]
    fn test_clone_shares_predicate() {
        let validator = Validator::new(is_string);
        let clone = validator.clone();
        assert_eq!(validator.is_valid(&json!("x")), clone.is_valid(&json!("x")));
    }
}
