//! Binary entrypoint for the `files-client` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    files_client::logging::init();

    // Recording is handled in commands::dispatch via FILES_CLIENT_RECORD=<dir>.
    match files_client::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
