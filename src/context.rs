//! Service context bundling the shell executor with per-session state.

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::adapters::live::LiveShellExecutor;
use crate::adapters::recording::RecordingShellExecutor;
use crate::adapters::replaying::ReplayingShellExecutor;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::{CaptureError, CapturedOutput, ShellExecutor};
use crate::runner::Shell;
use crate::state::LastRunResult;

/// Owns one shell executor and the last-run slot that `run_and_store`
/// writes to.
///
/// Constructors wire up different adapter implementations (live,
/// replaying, recording).
pub struct ServiceContext {
    /// Shell executor for running commands.
    pub shell: Box<dyn ShellExecutor>,
    last_run: LastRunResult,
}

impl ServiceContext {
    /// Creates a context around any executor.
    #[must_use]
    pub fn new(shell: Box<dyn ShellExecutor>) -> Self {
        Self { shell, last_run: LastRunResult::new() }
    }

    /// Creates a live context that spawns `shell`.
    #[must_use]
    pub fn live(shell: Shell) -> Self {
        Self::new(Box::new(LiveShellExecutor::new(shell)))
    }

    /// Creates a live context whose shell calls are also recorded.
    #[must_use]
    pub fn recording(shell: Shell, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        let live = Box::new(LiveShellExecutor::new(shell));
        Self::new(Box::new(RecordingShellExecutor::new(live, recorder)))
    }

    /// Creates a context that replays shell results from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = crate::cassette::load(path)?;
        Ok(Self::new(Box::new(ReplayingShellExecutor::new(CassetteReplayer::new(&cassette)))))
    }

    /// Runs `command` and returns its captured stdout.
    ///
    /// # Errors
    ///
    /// Propagates the executor's [`CaptureError`].
    pub fn execute(&self, command: &str) -> Result<CapturedOutput, CaptureError> {
        self.shell.execute(command)
    }

    /// Runs `command` and replaces the last-run slot with its output.
    ///
    /// # Errors
    ///
    /// Propagates the executor's [`CaptureError`]; the slot keeps its
    /// previous value.
    pub fn run_and_store(&self, command: &str) -> Result<(), CaptureError> {
        let output = self.shell.execute(command)?;
        self.last_run.store(output);
        Ok(())
    }

    /// Output stored by the most recent successful `run_and_store`, empty
    /// if there has been none.
    #[must_use]
    pub fn last_run(&self) -> CapturedOutput {
        self.last_run.get()
    }

    /// Does nothing.
    pub fn noop(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn write_cassette(path: &Path, outputs: &[(&str, serde_json::Value)]) {
        let interactions = outputs
            .iter()
            .zip(0..)
            .map(|((command, output), seq)| Interaction {
                seq,
                port: "shell".into(),
                method: "execute".into(),
                input: json!({ "command": command }),
                output: output.clone(),
            })
            .collect();
        let cassette =
            Cassette { name: "test".into(), recorded_at: Utc::now(), commit: "abc".into(), interactions };
        std::fs::write(path, serde_yaml::to_string(&cassette).unwrap()).unwrap();
    }

    #[test]
    fn run_and_store_matches_execute() {
        let dir = std::env::temp_dir().join("pipecap_context_store_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("shell.cassette.yaml");
        write_cassette(
            &path,
            &[("echo hello", json!({"ok": "hello\n"})), ("echo hello", json!({"ok": "hello\n"}))],
        );

        let ctx = ServiceContext::replaying(&path).unwrap();
        let direct = ctx.execute("echo hello").unwrap();
        ctx.run_and_store("echo hello").unwrap();
        assert_eq!(ctx.last_run(), direct);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn failed_run_leaves_last_result_untouched() {
        let dir = std::env::temp_dir().join("pipecap_context_fail_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("shell.cassette.yaml");
        write_cassette(
            &path,
            &[("echo kept", json!({"ok": "kept\n"})), ("echo lost", json!({"spawn_failed": "x"}))],
        );

        let ctx = ServiceContext::replaying(&path).unwrap();
        ctx.run_and_store("echo kept").unwrap();
        let err = ctx.run_and_store("echo lost").unwrap_err();

        assert!(matches!(err, CaptureError::Spawn(_)));
        assert_eq!(ctx.last_run(), "kept\n");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn spawn_failure_on_fresh_context_keeps_slot_empty() {
        let ctx = ServiceContext::live(Shell::new("/nonexistent/sh", "-c"));
        assert!(ctx.run_and_store("echo hello").is_err());
        assert!(ctx.last_run().is_empty());
    }

    #[test]
    fn noop_changes_nothing() {
        let ctx = ServiceContext::live(Shell::default());
        ctx.noop();
        assert!(ctx.last_run().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn sequential_runs_keep_only_the_latest() {
        let ctx = ServiceContext::live(Shell::default());
        ctx.run_and_store("echo first").unwrap();
        ctx.run_and_store("echo second").unwrap();
        assert_eq!(ctx.last_run(), "second\n");
    }

    #[test]
    fn replaying_missing_cassette_errors() {
        let result = ServiceContext::replaying(Path::new("/nonexistent/shell.cassette.yaml"));
        assert!(result.is_err());
    }
}
