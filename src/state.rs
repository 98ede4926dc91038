//! Single-slot cache for the output of the most recent run.

use std::sync::{Mutex, PoisonError};

use crate::ports::CapturedOutput;

/// Holds the last stored [`CapturedOutput`].
///
/// Starts empty and is only ever overwritten in full. Concurrent stores
/// leave whichever write landed last.
#[derive(Debug, Default)]
pub struct LastRunResult {
    slot: Mutex<CapturedOutput>,
}

impl LastRunResult {
    /// Creates an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored output.
    pub fn store(&self, output: CapturedOutput) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = output;
    }

    /// Returns a copy of the stored output.
    #[must_use]
    pub fn get(&self) -> CapturedOutput {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}
