//! Cassette data structures for recording and replaying interactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ports::{CaptureError, CapturedOutput};

/// A single recorded interaction with an external port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Sequence number (assigned automatically by the recorder).
    pub seq: u64,
    /// Port name (e.g. "shell").
    pub port: String,
    /// Method name invoked on the port.
    pub method: String,
    /// Input data sent to the port.
    pub input: serde_json::Value,
    /// Output data returned from the port.
    pub output: serde_json::Value,
}

/// A cassette containing a sequence of recorded interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Git commit hash at recording time.
    pub commit: String,
    /// Ordered list of interactions.
    pub interactions: Vec<Interaction>,
}

/// Recorded result of one `shell::execute` call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShellOutcome {
    /// The command ran; this is its stdout.
    Ok(CapturedOutput),
    /// The interpreter could not be spawned.
    SpawnFailed(String),
    /// Reading stdout failed part way through.
    ReadFailed(String),
    /// An inner replaying executor could not serve the call.
    ReplayFailed(String),
}

impl From<&Result<CapturedOutput, CaptureError>> for ShellOutcome {
    fn from(result: &Result<CapturedOutput, CaptureError>) -> Self {
        match result {
            Ok(output) => Self::Ok(output.clone()),
            Err(CaptureError::Spawn(err)) => Self::SpawnFailed(err.to_string()),
            Err(CaptureError::Read(err)) => Self::ReadFailed(err.to_string()),
            Err(CaptureError::Replay(msg)) => Self::ReplayFailed(msg.clone()),
        }
    }
}

impl From<ShellOutcome> for Result<CapturedOutput, CaptureError> {
    fn from(outcome: ShellOutcome) -> Self {
        match outcome {
            ShellOutcome::Ok(output) => Ok(output),
            ShellOutcome::SpawnFailed(msg) => Err(CaptureError::Spawn(std::io::Error::other(msg))),
            ShellOutcome::ReadFailed(msg) => Err(CaptureError::Read(std::io::Error::other(msg))),
            ShellOutcome::ReplayFailed(msg) => Err(CaptureError::Replay(msg)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn yaml_round_trip() {
        let cassette = Cassette {
            name: "test-cassette".into(),
            recorded_at: Utc::now(),
            commit: "abc123".into(),
            interactions: vec![Interaction {
                seq: 0,
                port: "shell".into(),
                method: "execute".into(),
                input: json!({"command": "echo hello"}),
                output: json!({"ok": "hello\n"}),
            }],
        };
        let yaml = serde_yaml::to_string(&cassette).expect("serialize");
        let deserialized: Cassette = serde_yaml::from_str(&yaml).expect("deserialize");
        assert_eq!(cassette, deserialized);
    }

    #[test]
    fn outcome_json_shape() {
        let ok = serde_json::to_value(ShellOutcome::Ok("hi\n".into())).unwrap();
        assert_eq!(ok, json!({"ok": "hi\n"}));

        let failed = serde_json::to_value(ShellOutcome::SpawnFailed("gone".into())).unwrap();
        assert_eq!(failed, json!({"spawn_failed": "gone"}));
    }

    #[test]
    fn spawn_failure_survives_recording() {
        let recorded: Result<CapturedOutput, CaptureError> =
            Err(CaptureError::Spawn(std::io::Error::from(std::io::ErrorKind::NotFound)));
        let outcome = ShellOutcome::from(&recorded);
        let replayed: Result<CapturedOutput, CaptureError> = outcome.into();
        assert!(matches!(replayed, Err(CaptureError::Spawn(_))));
    }
}
