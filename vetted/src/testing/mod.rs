//! Testing utilities for validators and checked functions.
//!
//! This module provides:
//! - Assertions for predicate results and contract violations
//! - A call recorder for proving whether a wrapped function ran
//! - Fixtures shared by the contract tests

mod assertions;
mod fixtures;
mod mocks;

pub use assertions::{
    assert_accepts, assert_postcondition_violation, assert_precondition_violation,
    assert_rejects,
};
pub use fixtures::{init_test_tracing, sum};
pub use mocks::CallRecorder;
