//! Logical composition of predicates.

use std::fmt;

use serde_json::Value;

use super::{BoxedPredicate, Predicate};

/// Predicate that holds when every inner predicate holds.
///
/// Built by [`and`]. With no inner predicates it accepts everything.
#[derive(Clone, Default)]
pub struct All {
    predicates: Vec<BoxedPredicate>,
}

impl All {
    /// Number of composed predicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Returns `true` if nothing was composed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl Predicate for All {
    fn test(&self, value: &Value) -> bool {
        self.predicates.iter().all(|predicate| predicate.test(value))
    }
}

impl fmt::Debug for All {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("All")
            .field("predicates", &self.predicates.len())
            .finish()
    }
}

/// Predicate that holds when at least one inner predicate holds.
///
/// Built by [`or`]. With no inner predicates it rejects everything.
#[derive(Clone, Default)]
pub struct Any {
    predicates: Vec<BoxedPredicate>,
}

impl Any {
    /// Number of composed predicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Returns `true` if nothing was composed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl Predicate for Any {
    fn test(&self, value: &Value) -> bool {
        self.predicates.iter().any(|predicate| predicate.test(value))
    }
}

impl fmt::Debug for Any {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Any")
            .field("predicates", &self.predicates.len())
            .finish()
    }
}

/// Composes predicates with logical AND.
///
/// Evaluation stops at the first rejecting predicate.
///
/// ```
/// use vetted::predicates::{and, is_in_range, is_number, PredicateExt, Predicate};
/// use serde_json::json;
///
/// let percentage = and([is_number.boxed(), is_in_range(0.0, 100.0).boxed()]);
/// assert!(percentage.test(&json!(42)));
/// assert!(!percentage.test(&json!("42")));
/// ```
pub fn and<I>(predicates: I) -> All
where
    I: IntoIterator<Item = BoxedPredicate>,
{
    All {
        predicates: predicates.into_iter().collect(),
    }
}

/// Composes predicates with logical OR.
///
/// Evaluation stops at the first accepting predicate.
pub fn or<I>(predicates: I) -> Any
where
    I: IntoIterator<Item = BoxedPredicate>,
{
    Any {
        predicates: predicates.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::{boxed, is_integer, is_number, is_string};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_and_empty_accepts_everything() {
        let all = and(Vec::<BoxedPredicate>::new());
        assert!(all.is_empty());
        for value in [json!(null), json!(1), json!("x"), json!([]), json!({})] {
            assert!(all.test(&value));
        }
    }

    #[test]
    fn test_or_empty_rejects_everything() {
        let any = or(Vec::<BoxedPredicate>::new());
        assert!(any.is_empty());
        for value in [json!(null), json!(1), json!("x"), json!([]), json!({})] {
            assert!(!any.test(&value));
        }
    }

    #[test]
    fn test_and_requires_every_predicate() {
        let all = and([boxed(is_number), boxed(is_integer)]);
        assert_eq!(all.len(), 2);
        assert!(all.test(&json!(3)));
        assert!(!all.test(&json!(3.5)));
        assert!(!all.test(&json!("3")));
    }

    #[test]
    fn test_or_requires_one_predicate() {
        let any = or([boxed(is_number), boxed(is_string)]);
        assert!(any.test(&json!(3)));
        assert!(any.test(&json!("3")));
        assert!(!any.test(&json!(true)));
    }

    #[test]
    fn test_and_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = {
            let calls = Arc::clone(&calls);
            move |_: &Value| {
                calls.fetch_add(1, Ordering::SeqCst);
                true
            }
        };

        let all = and([boxed(is_string), boxed(counted)]);
        assert!(!all.test(&json!(1)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert!(all.test(&json!("a")));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_nested_composition() {
        let string_or_whole = or([boxed(is_string), boxed(and([boxed(is_number), boxed(is_integer)]))]);
        assert!(string_or_whole.test(&json!("a")));
        assert!(string_or_whole.test(&json!(2)));
        assert!(!string_or_whole.test(&json!(2.5)));
    }
}
