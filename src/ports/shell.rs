//! Shell executor port for running external commands.

use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything a command wrote to its standard output, in arrival order.
///
/// The text is neither trimmed nor re-encoded: valid UTF-8 comes back
/// byte-for-byte, invalid sequences are replaced with U+FFFD.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapturedOutput(String);

impl CapturedOutput {
    /// Decodes raw stdout bytes into captured text.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(String::from_utf8_lossy(bytes).into_owned())
    }

    /// Returns the captured text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when the command wrote nothing to stdout.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the output, returning the owned text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for CapturedOutput {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for CapturedOutput {
    fn from(text: &str) -> Self {
        Self(text.to_owned())
    }
}

impl PartialEq<&str> for CapturedOutput {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for CapturedOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why capturing a command's output failed.
///
/// Failures inside the command itself (non-zero exit, unknown program under
/// the shell) are not represented here.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The interpreter process could not be created.
    #[error("spawn failed: {0}")]
    Spawn(#[source] io::Error),
    /// Reading the child's standard output failed part way through.
    #[error("reading command output failed: {0}")]
    Read(#[source] io::Error),
    /// A cassette could not answer the call: it is exhausted, malformed,
    /// or recorded a different command.
    #[error("replay failed: {0}")]
    Replay(String),
}

/// Executes shell commands.
///
/// Abstracting shell execution allows deterministic replay by recording
/// and replaying command outputs during cassette playback.
pub trait ShellExecutor: Send + Sync {
    /// Runs a command string in the system shell and returns its stdout.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::Spawn`] if the shell cannot be started, or
    /// [`CaptureError::Read`] if its output stream fails mid-read. Replaying
    /// executors return [`CaptureError::Replay`] when the cassette cannot
    /// serve the call.
    fn execute(&self, command: &str) -> Result<CapturedOutput, CaptureError>;
}
