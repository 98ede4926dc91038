//! Blocking command runner that captures standard output.
//!
//! The child's stdout is read through a pipe in fixed-size chunks until end
//! of stream, then the child is reaped. Stdin and stderr stay attached to the
//! caller's. There is no timeout: a command that never closes its stdout
//! blocks the calling thread for as long as it runs.

mod shell;

pub use shell::{Shell, DEFAULT_FLAG, DEFAULT_PROGRAM};

use std::io::{self, Read};
use std::process::{Child, ChildStdout, Stdio};

use tracing::{debug, warn};

use crate::ports::{CaptureError, CapturedOutput};

/// Number of bytes requested from the stdout pipe per read.
pub const CHUNK_SIZE: usize = 256;

/// Spawns commands through a [`Shell`] and captures their stdout.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    shell: Shell,
    chunk_size: usize,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new(Shell::default())
    }
}

impl CommandRunner {
    /// Creates a runner using the given interpreter.
    #[must_use]
    pub fn new(shell: Shell) -> Self {
        Self { shell, chunk_size: CHUNK_SIZE }
    }

    /// Overrides the read chunk size. Zero is treated as one.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Runs `command` and returns everything it wrote to stdout.
    ///
    /// The exit status is not inspected.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::Spawn`] if the interpreter cannot be started
    /// and [`CaptureError::Read`] if the stdout pipe fails mid-read. In the
    /// latter case the child is killed and reaped before returning.
    pub fn execute(&self, command: &str) -> Result<CapturedOutput, CaptureError> {
        let child = self
            .shell
            .command(command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|err| {
                debug!(program = %self.shell.program().display(), %err, "spawn failed");
                CaptureError::Spawn(err)
            })?;
        debug!(pid = child.id(), command, "spawned shell");

        let mut guard = ChildGuard(Some(child));
        let Some(mut stdout) = guard.take_stdout() else {
            return Err(CaptureError::Read(io::Error::other("stdout was not piped")));
        };
        let bytes = read_chunked(&mut stdout, self.chunk_size).map_err(CaptureError::Read)?;
        drop(stdout);
        guard.reap();

        debug!(bytes = bytes.len(), "captured stdout");
        Ok(CapturedOutput::from_bytes(&bytes))
    }
}

/// Runs `command` with the platform's default shell.
///
/// # Errors
///
/// See [`CommandRunner::execute`].
pub fn execute(command: &str) -> Result<CapturedOutput, CaptureError> {
    CommandRunner::default().execute(command)
}

/// Owns a spawned child until it has been waited on.
///
/// Dropping an unreaped guard kills the child and waits for it, so no exit
/// path leaves a zombie behind.
struct ChildGuard(Option<Child>);

impl ChildGuard {
    fn take_stdout(&mut self) -> Option<ChildStdout> {
        self.0.as_mut().and_then(|child| child.stdout.take())
    }

    fn reap(mut self) {
        if let Some(mut child) = self.0.take() {
            match child.wait() {
                Ok(status) => debug!(%status, "shell exited"),
                Err(err) => warn!(%err, "failed to reap shell process"),
            }
        }
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        if let Some(mut child) = self.0.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

/// Reads `reader` to end of stream, `chunk_size` bytes at a time.
fn read_chunked<R: Read>(reader: &mut R, chunk_size: usize) -> io::Result<Vec<u8>> {
    let mut buffer = vec![0_u8; chunk_size];
    let mut captured = Vec::new();
    loop {
        match reader.read(&mut buffer) {
            Ok(0) => return Ok(captured),
            Ok(n) => captured.extend_from_slice(&buffer[..n]),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err(err),
        }
    }
}
