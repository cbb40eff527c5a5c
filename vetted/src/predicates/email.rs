//! Email address format check.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

/// Pattern used by [`is_valid_email`].
///
/// Local part and domain are runs of ASCII word characters, `-`, `.`, and
/// the Latin-1 letters `U+00C0..=U+00FC` (the local part also allows `+`).
/// The top-level segment needs at least two ASCII letters. Local domain names
/// without a dot are not supported.
pub const EMAIL_PATTERN: &str =
    r"^[A-Za-z0-9_\-.+\x{C0}-\x{FC}]+@[A-Za-z0-9_\-.\x{C0}-\x{FC}]+\.[A-Za-z]{2,}$";

#[allow(clippy::expect_used)]
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// Returns `true` if `email` looks like a valid email address.
///
/// This is a structural check only. Punycode domains (`xn--...`) pass,
/// repeated separators such as `..` in the local part pass, and numeric or
/// single-letter top-level segments fail.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// [`is_valid_email`] as a predicate over JSON values. Non-strings are rejected.
pub fn is_email(value: &Value) -> bool {
    value.as_str().is_some_and(is_valid_email)
}
