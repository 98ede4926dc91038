//! Platform command interpreter selection.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Interpreter used when none is configured.
#[cfg(windows)]
pub const DEFAULT_PROGRAM: &str = "cmd";
/// Flag introducing the command line for [`DEFAULT_PROGRAM`].
#[cfg(windows)]
pub const DEFAULT_FLAG: &str = "/C";

/// Interpreter used when none is configured.
#[cfg(not(windows))]
pub const DEFAULT_PROGRAM: &str = "/bin/sh";
/// Flag introducing the command line for [`DEFAULT_PROGRAM`].
#[cfg(not(windows))]
pub const DEFAULT_FLAG: &str = "-c";

/// The interpreter a command line is handed to, plus the flag that
/// introduces the command line (`/bin/sh -c`, `cmd /C`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    program: PathBuf,
    flag: String,
}

impl Shell {
    /// Creates a shell from an interpreter path and its command flag.
    #[must_use]
    pub fn new(program: impl Into<PathBuf>, flag: impl Into<String>) -> Self {
        Self { program: program.into(), flag: flag.into() }
    }

    /// Path or name of the interpreter binary.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Flag passed before the command line.
    #[must_use]
    pub fn flag(&self) -> &str {
        &self.flag
    }

    /// Builds the process invocation for `command_line`. Stdio is left to
    /// the caller.
    pub(crate) fn command(&self, command_line: &str) -> Command {
        let mut command = Command::new(&self.program);
        command.arg(&self.flag);
        append_command_line(&mut command, command_line);
        command
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM, DEFAULT_FLAG)
    }
}

// cmd.exe does its own parsing, so the line must reach it unquoted.
#[cfg(windows)]
fn append_command_line(command: &mut Command, line: &str) {
    use std::os::windows::process::CommandExt;
    command.raw_arg(line);
}

#[cfg(not(windows))]
fn append_command_line(command: &mut Command, line: &str) {
    command.arg(line);
}
