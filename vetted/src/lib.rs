//! # Vetted
//!
//! Predicate combinators, structural validators and function contracts over
//! JSON values.
//!
//! Vetted provides:
//!
//! - **Predicates**: boolean tests over [`serde_json::Value`] composed with
//!   `and`/`or`, plus numeric, shape and email checks
//! - **Structural validators**: lift per-field or per-element predicates into
//!   validators for records, tuples and lists
//! - **Contracts**: wrap a function with a precondition on its arguments and a
//!   postcondition on its result
//!
//! ## Quick Start
//!
//! ```rust
//! use vetted::prelude::*;
//! use serde_json::{json, Value};
//!
//! let person = validate_record(
//!     RecordValidation::new()
//!         .field("name", is_string)
//!         .field("email", is_email),
//! );
//! assert!(person.is_valid(&json!({"name": "Ada", "email": "ada@example.org"})));
//!
//! fn sum(args: &[Value]) -> i64 {
//!     args.iter().filter_map(Value::as_i64).sum()
//! }
//!
//! let sum = checked!(sum, Checks::new().with_precondition(validate_list(is_number)));
//! assert_eq!(sum.call_with([1, 4]).unwrap(), 5);
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod contracts;
pub mod errors;
pub mod predicates;
pub mod testing;
pub mod validation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::checked;
    pub use crate::contracts::{check_function, CheckedFn, Checks};
    pub use crate::errors::{ContractError, PostconditionViolation, PreconditionViolation};
    pub use crate::predicates::{
        and, boxed, is_array, is_boolean, is_email, is_float, is_in_range, is_integer,
        is_null, is_number, is_object, is_string, is_valid_email, or, BoxedPredicate,
        Predicate, PredicateExt,
    };
    pub use crate::validation::{
        validate_list, validate_record, validate_tuple, RecordValidation, TupleValidation,
        Validated, Validator,
    };
}
