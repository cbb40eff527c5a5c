//! Structural validators for records, tuples and lists.
//!
//! Each builder lifts per-field or per-element predicates into a
//! [`Validator`] over a whole JSON value. Validators are predicates too, so
//! they can be used as field predicates of another validator or as contract
//! checks.

mod list;
pub mod presets;
mod record;
mod tuple;
mod validator;

pub use list::validate_list;
pub use record::{validate_record, RecordValidation};
pub use tuple::{validate_tuple, TupleValidation};
pub use validator::{Validated, Validator};
