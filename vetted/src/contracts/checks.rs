//! Pre- and post-condition configuration.

use std::fmt;

use serde_json::Value;

use crate::predicates::{boxed, BoxedPredicate, Predicate};

/// Optional precondition and postcondition for one checked function.
///
/// The precondition sees the full argument list as a JSON array, so tuple
/// and list validators fit naturally. The postcondition sees the result
/// converted to JSON.
#[derive(Clone, Default)]
pub struct Checks {
    precondition: Option<BoxedPredicate>,
    postcondition: Option<BoxedPredicate>,
}

impl Checks {
    /// Creates a configuration with no checks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the precondition.
    #[must_use]
    pub fn with_precondition<P>(mut self, predicate: P) -> Self
    where
        P: Predicate + 'static,
    {
        self.precondition = Some(boxed(predicate));
        self
    }

    /// Sets the postcondition.
    #[must_use]
    pub fn with_postcondition<P>(mut self, predicate: P) -> Self
    where
        P: Predicate + 'static,
    {
        self.postcondition = Some(boxed(predicate));
        self
    }

    /// Returns `true` if a precondition is configured.
    #[must_use]
    pub fn has_precondition(&self) -> bool {
        self.precondition.is_some()
    }

    /// Returns `true` if a postcondition is configured.
    #[must_use]
    pub fn has_postcondition(&self) -> bool {
        self.postcondition.is_some()
    }

    /// Applies the precondition; passes when none is configured.
    pub fn arguments_pass(&self, arguments: &Value) -> bool {
        self.precondition
            .as_ref()
            .map_or(true, |predicate| predicate.test(arguments))
    }

    /// Applies the postcondition; passes when none is configured.
    pub fn result_passes(&self, result: &Value) -> bool {
        self.postcondition
            .as_ref()
            .map_or(true, |predicate| predicate.test(result))
    }
}

impl fmt::Debug for Checks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checks")
            .field("precondition", &self.has_precondition())
            .field("postcondition", &self.has_postcondition())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::{is_array, is_number};
    use serde_json::json;

    #[test]
    fn test_empty_checks_pass_everything() {
        let checks = Checks::new();
        assert!(!checks.has_precondition());
        assert!(!checks.has_postcondition());
        assert!(checks.arguments_pass(&json!([1, 2])));
        assert!(checks.result_passes(&json!(null)));
    }

    #[test]
    fn test_configured_checks() {
        let checks = Checks::new()
            .with_precondition(is_array)
            .with_postcondition(is_number);
        assert!(checks.has_precondition());
        assert!(checks.has_postcondition());
        assert!(checks.arguments_pass(&json!([])));
        assert!(!checks.result_passes(&json!("3")));
    }

    #[test]
    fn test_debug_hides_predicates() {
        let checks = Checks::new().with_precondition(is_array);
        assert_eq!(
            format!("{checks:?}"),
            "Checks { precondition: true, postcondition: false }"
        );
    }
}
