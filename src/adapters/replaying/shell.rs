//! Replaying adapter for the `ShellExecutor` port.

use std::sync::{Mutex, PoisonError};

use crate::cassette::format::ShellOutcome;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::shell::{CaptureError, CapturedOutput, ShellExecutor};

/// Replays recorded shell command results from a cassette.
///
/// Nothing is spawned. Each call must ask for the command recorded at the
/// same position, otherwise it fails with [`CaptureError::Replay`].
pub struct ReplayingShellExecutor {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingShellExecutor {
    /// Creates a new replaying shell executor from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl ShellExecutor for ReplayingShellExecutor {
    fn execute(&self, command: &str) -> Result<CapturedOutput, CaptureError> {
        let interaction = self
            .replayer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .next_interaction("shell", "execute")
            .map_err(CaptureError::Replay)?;

        let recorded = interaction.input.get("command").and_then(serde_json::Value::as_str);
        if recorded != Some(command) {
            return Err(CaptureError::Replay(format!(
                "interaction seq={} recorded command {recorded:?}, but {command:?} was requested",
                interaction.seq
            )));
        }

        let outcome: ShellOutcome = serde_json::from_value(interaction.output).map_err(|e| {
            CaptureError::Replay(format!(
                "malformed shell interaction at seq={}: {e}",
                interaction.seq
            ))
        })?;
        outcome.into()
    }
}
