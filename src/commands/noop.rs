//! `pipecap noop` command.

use crate::context::ServiceContext;

/// Execute the `noop` command.
pub fn run(ctx: &ServiceContext) {
    ctx.noop();
}
