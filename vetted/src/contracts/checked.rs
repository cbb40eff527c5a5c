//! Functions wrapped with runtime contract checks.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::Checks;
use crate::errors::{ContractError, PostconditionViolation, PreconditionViolation};

/// A function guarded by a [`Checks`] configuration.
///
/// Built by [`check_function`] or the [`checked!`](crate::checked) macro.
pub struct CheckedFn<F> {
    name: String,
    function: F,
    checks: Checks,
}

impl<F> CheckedFn<F> {
    /// Binds the name used in violation messages.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Name used in violation messages, empty if anonymous.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The configured checks.
    pub fn checks(&self) -> &Checks {
        &self.checks
    }

    /// Calls the wrapped function under its contract.
    ///
    /// The precondition runs first; when it rejects, the function is not
    /// invoked. The postcondition runs on the result after the call, so any
    /// side effects of the function have already happened when it rejects.
    pub fn call<R>(&self, args: &[Value]) -> Result<R, ContractError>
    where
        F: Fn(&[Value]) -> R,
        R: Serialize,
    {
        if self.checks.has_precondition() && !self.checks.arguments_pass(&Value::Array(args.to_vec())) {
            let violation = PreconditionViolation::new(self.name.as_str(), args.to_vec());
            debug!(function = %self.name, call = %violation.call, "precondition violated");
            return Err(violation.into());
        }

        let result = (self.function)(args);

        if self.checks.has_postcondition() {
            let rendered = serde_json::to_value(&result)?;
            if !self.checks.result_passes(&rendered) {
                let violation =
                    PostconditionViolation::new(self.name.as_str(), args.to_vec(), rendered);
                debug!(
                    function = %self.name,
                    call = %violation.call,
                    result = %violation.rendered_result,
                    "postcondition violated"
                );
                return Err(violation.into());
            }
        }

        Ok(result)
    }

    /// Same as [`call`](Self::call), converting each argument to JSON first.
    pub fn call_with<R, I, A>(&self, args: I) -> Result<R, ContractError>
    where
        F: Fn(&[Value]) -> R,
        R: Serialize,
        I: IntoIterator<Item = A>,
        A: Into<Value>,
    {
        let args: Vec<Value> = args.into_iter().map(Into::into).collect();
        self.call(&args)
    }
}

impl<F> fmt::Debug for CheckedFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckedFn")
            .field("name", &self.name)
            .field("checks", &self.checks)
            .finish_non_exhaustive()
    }
}

/// Wraps `function` with the given checks.
///
/// The wrapper starts anonymous; use [`CheckedFn::named`] or the
/// [`checked!`](crate::checked) macro to bind a name for messages.
///
/// ```
/// use vetted::contracts::{check_function, Checks};
/// use vetted::predicates::is_in_range;
/// use serde_json::Value;
///
/// fn sum(args: &[Value]) -> i64 {
///     args.iter().filter_map(Value::as_i64).sum()
/// }
///
/// let checked = check_function(sum, Checks::new().with_postcondition(is_in_range(0.0, 10.0)))
///     .named("sum");
/// assert_eq!(checked.call_with([1, 4]).unwrap(), 5);
///
/// let err = checked.call_with([2, 9]).unwrap_err();
/// assert_eq!(err.to_string(), "result didn't match the postcondition: sum(2, 9) => 11");
/// ```
pub fn check_function<F>(function: F, checks: Checks) -> CheckedFn<F> {
    CheckedFn {
        name: String::new(),
        function,
        checks,
    }
}

/// Wraps a named function with checks, binding its identifier as the name.
///
/// ```
/// use vetted::checked;
/// use vetted::contracts::Checks;
/// use serde_json::Value;
///
/// fn double(args: &[Value]) -> i64 {
///     args.first().and_then(Value::as_i64).unwrap_or_default() * 2
/// }
///
/// let double = checked!(double, Checks::new());
/// assert_eq!(double.name(), "double");
/// assert_eq!(double.call_with([21]).unwrap(), 42);
/// ```
#[macro_export]
macro_rules! checked {
    ($function:ident) => {
        $crate::checked!($function, $crate::contracts::Checks::new())
    };
    ($function:ident, $checks:expr $(,)?) => {
        $crate::contracts::check_function($function, $checks).named(stringify!($function))
    };
}
