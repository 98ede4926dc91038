//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::runner::{Shell, DEFAULT_FLAG, DEFAULT_PROGRAM};

/// Top-level CLI parser for `pipecap`.
#[derive(Debug, Parser)]
#[command(name = "pipecap", version, about = "Run a shell command and capture its stdout")]
pub struct Cli {
    /// Log at debug level regardless of `RUST_LOG`.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Interpreter settings.
    #[command(flatten)]
    pub shell: ShellArgs,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Which interpreter receives the command line.
#[derive(Debug, Args)]
pub struct ShellArgs {
    /// Interpreter to spawn.
    #[arg(long = "shell", env = "PIPECAP_SHELL", default_value = DEFAULT_PROGRAM, global = true)]
    pub program: PathBuf,

    /// Flag that introduces the command line.
    #[arg(
        long = "shell-flag",
        env = "PIPECAP_SHELL_FLAG",
        default_value = DEFAULT_FLAG,
        allow_hyphen_values = true,
        global = true
    )]
    pub flag: String,
}

impl ShellArgs {
    /// The interpreter these arguments select.
    #[must_use]
    pub fn to_shell(&self) -> Shell {
        Shell::new(&self.program, &self.flag)
    }
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a command and print its stdout verbatim.
    Exec {
        /// Command line handed to the shell.
        command: String,
    },
    /// Run commands in order, keeping only the last output, then print it.
    Run {
        /// Command lines handed to the shell, one run each.
        #[arg(required = true)]
        commands: Vec<String>,
    },
    /// Do nothing.
    Noop,
}
