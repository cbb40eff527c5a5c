//! Spies for checked functions.

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;

/// Records the arguments of every call made through [`CallRecorder::wrap`].
///
/// Clones share the same record, so a clone can be moved into the wrapped
/// function while the original is kept for assertions.
#[derive(Debug, Clone, Default)]
pub struct CallRecorder {
    calls: Arc<Mutex<Vec<Vec<Value>>>>,
}

impl CallRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a function so that each call is recorded before it runs.
    pub fn wrap<F, R>(&self, function: F) -> impl Fn(&[Value]) -> R + Send + Sync
    where
        F: Fn(&[Value]) -> R + Send + Sync,
    {
        let recorder = self.clone();
        move |args: &[Value]| {
            recorder.calls.lock().push(args.to_vec());
            function(args)
        }
    }

    /// Returns the number of recorded calls.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Returns the arguments of each recorded call.
    #[must_use]
    pub fn calls(&self) -> Vec<Vec<Value>> {
        self.calls.lock().clone()
    }

    /// Clears recorded calls.
    pub fn reset(&self) {
        self.calls.lock().clear();
    }
}
