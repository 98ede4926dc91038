//! Recording adapter for the `ShellExecutor` port.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_interaction;
use crate::cassette::format::ShellOutcome;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::{CaptureError, CapturedOutput, ShellExecutor};

/// Records shell interactions while delegating to an inner implementation.
pub struct RecordingShellExecutor {
    inner: Box<dyn ShellExecutor>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingShellExecutor {
    /// Creates a new recording shell executor wrapping the given implementation.
    pub fn new(inner: Box<dyn ShellExecutor>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct CommandInput<'a> {
    command: &'a str,
}

impl ShellExecutor for RecordingShellExecutor {
    fn execute(&self, command: &str) -> Result<CapturedOutput, CaptureError> {
        let result = self.inner.execute(command);
        let outcome = ShellOutcome::from(&result);
        record_interaction(&self.recorder, "shell", "execute", &CommandInput { command }, &outcome);
        result
    }
}
