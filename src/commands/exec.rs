//! `pipecap exec` command.

use super::print_verbatim;
use crate::context::ServiceContext;

/// Execute the `exec` command: run `command` and print its stdout.
///
/// # Errors
///
/// Returns an error string if the shell cannot be spawned or its output
/// cannot be read or printed.
pub fn run(ctx: &ServiceContext, command: &str) -> Result<(), String> {
    let output = ctx.execute(command).map_err(|e| e.to_string())?;
    print_verbatim(output.as_str())
}
