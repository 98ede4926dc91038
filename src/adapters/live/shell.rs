//! Live shell executor backed by [`CommandRunner`].

use crate::ports::shell::{CaptureError, CapturedOutput, ShellExecutor};
use crate::runner::{CommandRunner, Shell};

/// Runs commands for real through the configured interpreter.
#[derive(Debug, Clone, Default)]
pub struct LiveShellExecutor {
    runner: CommandRunner,
}

impl LiveShellExecutor {
    /// Creates an executor that spawns `shell`.
    #[must_use]
    pub fn new(shell: Shell) -> Self {
        Self { runner: CommandRunner::new(shell) }
    }
}

impl ShellExecutor for LiveShellExecutor {
    fn execute(&self, command: &str) -> Result<CapturedOutput, CaptureError> {
        self.runner.execute(command)
    }
}
