//! Recording adapters that capture interactions to cassettes.

pub mod shell;

pub use shell::RecordingShellExecutor;

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use tracing::warn;

use crate::cassette::recorder::CassetteRecorder;

/// Record one interaction on `recorder`.
///
/// Values that fail to serialize are logged and skipped so that recording
/// never changes the outcome of the call being recorded.
pub(crate) fn record_interaction<I, O>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize,
    O: Serialize,
{
    let (input_json, output_json) = match (serde_json::to_value(input), serde_json::to_value(output))
    {
        (Ok(input), Ok(output)) => (input, output),
        (Err(err), _) | (_, Err(err)) => {
            warn!(port, method, %err, "failed to serialize interaction, not recorded");
            return;
        }
    };

    let mut guard = recorder.lock().unwrap_or_else(PoisonError::into_inner);
    guard.record(port, method, input_json, output_json);
}
