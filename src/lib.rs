//! Injectable file-system and download capability.
//!
//! Calling code depends on the [`ports::Files`] trait and receives an
//! implementation at startup: [`adapters::live::LiveFiles`] in production,
//! or a recording, replaying, or overriding double in tests.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod ports;

pub use config::FilesConfig;
pub use context::ServiceContext;
pub use error::{FilesError, FilesErrorKind};
pub use ports::{DownloadReport, Files, SupportDir};

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command, cli.app_name.as_deref())
}
