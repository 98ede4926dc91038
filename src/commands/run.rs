//! `pipecap run` command.

use tracing::debug;

use super::print_verbatim;
use crate::context::ServiceContext;

/// Execute the `run` command: store each command's output in turn, then
/// print whatever the last successful run left behind.
///
/// # Errors
///
/// Returns an error string at the first command whose shell cannot be
/// spawned; later commands are not run.
pub fn run(ctx: &ServiceContext, commands: &[String]) -> Result<(), String> {
    for (index, command) in commands.iter().enumerate() {
        debug!(index, command = command.as_str(), "run_and_store");
        ctx.run_and_store(command).map_err(|e| format!("command {}: {e}", index + 1))?;
    }
    print_verbatim(ctx.last_run().as_str())
}
