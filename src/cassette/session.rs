//! Recording session owning the shell cassette recorder.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::warn;

use super::recorder::CassetteRecorder;

/// Default parent directory for recording sessions, relative to cwd.
pub const DEFAULT_CASSETTE_DIR: &str = ".pipecap/cassettes";

/// A timestamped directory that shell interactions are recorded into.
pub struct RecordingSession {
    /// Recorder for shell interactions.
    pub shell: Arc<Mutex<CassetteRecorder>>,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Create a session directory at `<root>/<timestamp>/`.
    ///
    /// # Errors
    ///
    /// Returns an error if the session directory already exists or cannot
    /// be created.
    pub fn new(root: &Path) -> Result<Self, String> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S%.3f").to_string();
        let output_dir = root.join(&timestamp);

        if output_dir.exists() {
            return Err(format!("Cassette directory already exists: {}", output_dir.display()));
        }
        std::fs::create_dir_all(&output_dir)
            .map_err(|e| format!("Failed to create cassette directory: {e}"))?;

        let recorder = CassetteRecorder::new(
            output_dir.join("shell.cassette.yaml"),
            format!("{timestamp}-shell"),
            commit_hash(),
        );
        Ok(Self { shell: Arc::new(Mutex::new(recorder)), output_dir })
    }

    /// Directory the cassette files are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write the shell cassette and return the session directory.
    ///
    /// # Errors
    ///
    /// Returns an error if a recording adapter still holds the recorder or
    /// the cassette cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.shell)
            .map_err(|_| "Recording adapter for shell still has references".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock for shell poisoned: {e}"))?;
        recorder.finish().map_err(|e| format!("Failed to write shell cassette: {e}"))?;
        Ok(self.output_dir)
    }
}

/// Current git commit hash, or "unknown" if it cannot be determined.
fn commit_hash() -> String {
    let hash = std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string());

    hash.unwrap_or_else(|| {
        warn!("could not get git commit hash, using 'unknown'");
        "unknown".to_string()
    })
}
