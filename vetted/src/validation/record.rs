//! Record (JSON object) validation.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::trace;

use super::Validator;
use crate::predicates::{boxed, BoxedPredicate, Predicate};

/// Expected key set of a record and the predicate for each field.
#[derive(Clone, Default)]
pub struct RecordValidation {
    fields: BTreeMap<String, BoxedPredicate>,
}

impl RecordValidation {
    /// Creates an empty validation, which only accepts `{}`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field.
    ///
    /// Numeric keys are stored in their decimal form, matching how JSON
    /// object keys are written. Adding the same key twice keeps the last
    /// predicate.
    #[must_use]
    pub fn field<K, P>(mut self, key: K, predicate: P) -> Self
    where
        K: ToString,
        P: Predicate + 'static,
    {
        self.fields.insert(key.to_string(), boxed(predicate));
        self
    }

    /// Number of expected fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no fields are expected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Expected keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Keys present in exactly one of the object and this validation.
    pub fn mismatched_keys<'a>(&'a self, object: &'a Map<String, Value>) -> BTreeSet<&'a str> {
        let unexpected = object
            .keys()
            .filter(|key| !self.fields.contains_key(key.as_str()));
        let missing = self
            .fields
            .keys()
            .filter(|key| !object.contains_key(key.as_str()));
        unexpected.chain(missing).map(String::as_str).collect()
    }

    fn accepts(&self, value: &Value) -> bool {
        let Some(object) = value.as_object() else {
            trace!("record validation rejected a non-object value");
            return false;
        };

        let mismatched = self.mismatched_keys(object);
        if !mismatched.is_empty() {
            trace!(keys = ?mismatched, "record key set mismatch");
            return false;
        }

        self.fields.iter().all(|(key, predicate)| {
            predicate.test(object.get(key).unwrap_or(&Value::Null))
        })
    }
}

impl<K, P> FromIterator<(K, P)> for RecordValidation
where
    K: ToString,
    P: Predicate + 'static,
{
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |validation, (key, predicate)| validation.field(key, predicate))
    }
}

impl fmt::Debug for RecordValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordValidation")
            .field("keys", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Builds a validator for records with exactly the given fields.
///
/// A value is accepted when it is an object, its key set equals the
/// validation's key set, and every field satisfies its predicate. Predicates
/// are not evaluated when the key sets differ.
///
/// ```
/// use vetted::predicates::{is_number, is_string};
/// use vetted::validation::{validate_record, RecordValidation};
/// use serde_json::json;
///
/// let person = validate_record(
///     RecordValidation::new().field("name", is_string).field("age", is_number),
/// );
/// assert!(person.is_valid(&json!({"name": "Ada", "age": 36})));
/// assert!(!person.is_valid(&json!({"name": "Ada"})));
/// ```
#[must_use]
pub fn validate_record(validation: RecordValidation) -> Validator {
    let validation = Arc::new(validation);
    Validator::new(move |value: &Value| validation.accepts(value))
}
