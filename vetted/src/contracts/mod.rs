//! Runtime contracts for functions.
//!
//! This module provides:
//! - [`Checks`], the optional precondition/postcondition pair
//! - [`check_function`] and [`CheckedFn`], which enforce the checks per call
//! - Rendering helpers used to build violation messages

mod checked;
mod checks;
mod render;

pub use checked::{check_function, CheckedFn};
pub use checks::Checks;
pub use render::{render_argument, render_call, render_json};
