//! Command dispatch and handlers.

pub mod exec;
pub mod noop;
pub mod run;

use std::env;
use std::io::Write;
use std::path::PathBuf;

use crate::cassette::session::{RecordingSession, DEFAULT_CASSETTE_DIR};
use crate::cli::{Cli, Command};
use crate::context::ServiceContext;

/// Dispatch a parsed command line to its handler.
///
/// `PIPECAP_REPLAY=<file>` serves shell results from a cassette instead of
/// spawning. Otherwise `PIPECAP_RECORD=<dir>` records every shell call into
/// a timestamped session under that directory (empty means the default
/// `.pipecap/cassettes`).
///
/// # Errors
///
/// Returns an error string if the context cannot be built, the handler
/// fails, or the recording cannot be written.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let shell = cli.shell.to_shell();

    if let Ok(path) = env::var("PIPECAP_REPLAY") {
        let ctx = ServiceContext::replaying(&PathBuf::from(path))?;
        return dispatch_with_context(&cli.command, &ctx);
    }

    let Ok(root) = env::var("PIPECAP_RECORD") else {
        return dispatch_with_context(&cli.command, &ServiceContext::live(shell));
    };
    let root = if root.is_empty() { PathBuf::from(DEFAULT_CASSETTE_DIR) } else { PathBuf::from(root) };
    let session = RecordingSession::new(&root)?;
    let ctx = ServiceContext::recording(shell, std::sync::Arc::clone(&session.shell));

    let result = dispatch_with_context(&cli.command, &ctx);

    // Finish recording after command completes (even on error).
    // Drop context first to release the recorder reference.
    drop(ctx);
    let output_dir = session.finish()?;
    eprintln!("Recording saved to: {}", output_dir.display());

    result
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    match command {
        Command::Exec { command } => exec::run(ctx, command),
        Command::Run { commands } => run::run(ctx, commands),
        Command::Noop => {
            noop::run(ctx);
            Ok(())
        }
    }
}

/// Write captured text to stdout exactly as captured.
fn print_verbatim(text: &str) -> Result<(), String> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| format!("Failed to write output: {e}"))
}
