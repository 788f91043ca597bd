//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `files-client`.
#[derive(Debug, Parser)]
#[command(name = "files-client", version, about = "Exercise the files capability from a shell")]
pub struct Cli {
    /// Application name used for the support directory. Overrides
    /// `FILES_CLIENT_APP_NAME`.
    #[arg(long, global = true)]
    pub app_name: Option<String>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// One subcommand per files operation.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a file's text.
    Read {
        /// File to read.
        path: PathBuf,
    },
    /// Print the temporary directory.
    TempDir,
    /// Print a fresh temporary file path. Nothing is created.
    TempFile {
        /// Extension for the file name.
        #[arg(default_value = "tmp")]
        extension: String,
    },
    /// Create a directory and any missing parents.
    Mkdir {
        /// Directory to create.
        path: PathBuf,
    },
    /// Resolve (and create) the application-support directory.
    AppSupport,
    /// Download a URL to a local file.
    Download {
        /// Source URL.
        url: String,
        /// Destination file. Replaced if it exists.
        destination: PathBuf,
    },
}
