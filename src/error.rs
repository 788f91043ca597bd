//! Error types for the files capability.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse classification of a [`FilesError`].
///
/// Recorded alongside error messages in cassettes so that replayed failures
/// can still be matched by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilesErrorKind {
    /// The file could not be read or decoded.
    Read,
    /// A directory could not be created.
    DirectoryCreation,
    /// A download could not be fetched or moved into place.
    Download,
}

/// Errors raised by [`Files`](crate::ports::Files) operations.
#[derive(Debug, Error)]
pub enum FilesError {
    /// The file does not exist or is not readable.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Location that was read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The file exists but does not hold UTF-8 text.
    #[error("{} is not valid UTF-8 text: {source}", .path.display())]
    NotText {
        /// Location that was read.
        path: PathBuf,
        /// Decoding failure.
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The directory could not be created.
    #[error("failed to create directory {}: {source}", .path.display())]
    DirectoryCreation {
        /// Directory that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The HTTP request failed before a response body was received in full.
    #[error("request for {url} failed: {source}")]
    Request {
        /// Source URL.
        url: String,
        /// Transport failure.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("request for {url} returned HTTP {status}")]
    HttpStatus {
        /// Source URL.
        url: String,
        /// Status code returned.
        status: u16,
    },

    /// The payload could not be written to the temporary file.
    #[error("failed to write download to {}: {source}", .path.display())]
    DownloadWrite {
        /// Temporary file being written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The fetched payload could not be moved to its destination.
    #[error("failed to move download to {}: {source}", .path.display())]
    Move {
        /// Final destination.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A detached download was requested outside a tokio runtime.
    #[error("no tokio runtime available to run the download of {url}")]
    NoRuntime {
        /// Source URL.
        url: String,
    },

    /// A failure served from a cassette by a replaying double.
    #[error("{message}")]
    Replayed {
        /// Kind of the originally recorded failure.
        kind: FilesErrorKind,
        /// Message of the originally recorded failure.
        message: String,
    },
}

impl FilesError {
    /// Returns the coarse classification of this error.
    #[must_use]
    pub fn kind(&self) -> FilesErrorKind {
        match self {
            Self::Read { .. } | Self::NotText { .. } => FilesErrorKind::Read,
            Self::DirectoryCreation { .. } => FilesErrorKind::DirectoryCreation,
            Self::Request { .. }
            | Self::HttpStatus { .. }
            | Self::DownloadWrite { .. }
            | Self::Move { .. }
            | Self::NoRuntime { .. } => FilesErrorKind::Download,
            Self::Replayed { kind, .. } => *kind,
        }
    }
}
