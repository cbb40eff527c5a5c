//! Test fixtures for contract tests.

use serde_json::Value;
use tracing_subscriber::EnvFilter;

/// Adds every integer argument.
///
/// Non-integer arguments are ignored.
pub fn sum(args: &[Value]) -> i64 {
    args.iter().filter_map(Value::as_i64).sum()
}

/// Installs a fmt subscriber for tests, filtered by `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
