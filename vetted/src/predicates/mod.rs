//! Boolean predicates over JSON values and the combinators that compose them.
//!
//! This module provides:
//! - The [`Predicate`] trait and its shared, type-erased form [`BoxedPredicate`]
//! - Logical composition with [`and`] and [`or`]
//! - Primitive shape checks (`is_number`, `is_string`, ...)
//! - Numeric checks ([`is_float`], [`is_in_range`])
//! - The fixed email format check ([`is_valid_email`])

mod combinators;
mod email;
mod numeric;
mod primitives;

use std::sync::Arc;

use serde_json::Value;

pub use combinators::{and, or, All, Any};
pub use email::{is_email, is_valid_email, EMAIL_PATTERN};
pub use numeric::{is_float, is_in_range, MAX_SAFE_INTEGER};
pub use primitives::{
    is_array, is_boolean, is_integer, is_null, is_number, is_object, is_string,
};

/// A deterministic, side-effect free boolean test over one value.
///
/// Any `Fn(&Value) -> bool` that is `Send + Sync` is a predicate, so plain
/// functions such as [`is_number`] and closures annotated with `&Value` can be
/// used wherever a predicate is expected.
pub trait Predicate: Send + Sync {
    /// Returns `true` if the value is accepted.
    fn test(&self, value: &Value) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    fn test(&self, value: &Value) -> bool {
        self(value)
    }
}

/// A shared, type-erased predicate.
pub type BoxedPredicate = Arc<dyn Predicate>;

/// Erases the type of a predicate so it can be stored next to others.
pub fn boxed<P>(predicate: P) -> BoxedPredicate
where
    P: Predicate + 'static,
{
    Arc::new(predicate)
}

/// Fluent composition helpers available on every predicate.
pub trait PredicateExt: Predicate + Sized + 'static {
    /// Accepts values accepted by both `self` and `other`.
    fn and<P>(self, other: P) -> All
    where
        P: Predicate + 'static,
    {
        and([boxed(self), boxed(other)])
    }

    /// Accepts values accepted by `self` or `other`.
    fn or<P>(self, other: P) -> Any
    where
        P: Predicate + 'static,
    {
        or([boxed(self), boxed(other)])
    }

    /// Same as [`boxed`].
    fn boxed(self) -> BoxedPredicate {
        boxed(self)
    }
}

impl<P> PredicateExt for P where P: Predicate + Sized + 'static {}
