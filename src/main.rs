//! Binary entrypoint for the `pipecap` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Settings such as PIPECAP_SHELL may come from a local .env file.
    let _ = dotenvy::dotenv();

    match pipecap::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
