//! Port traits defining external boundaries.
//!
//! The only boundary is the system shell. Implementations live in
//! `src/adapters/`.

pub mod shell;

pub use shell::{CaptureError, CapturedOutput, ShellExecutor};
