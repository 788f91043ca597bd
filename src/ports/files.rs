//! Files port: the injectable file-system and download capability.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::FilesError;

/// Boxed future returned by [`Files::read`].
pub type ReadFuture<'a> = Pin<Box<dyn Future<Output = Result<String, FilesError>> + Send + 'a>>;

/// Boxed future returned by [`Files::download`].
///
/// Owns everything it needs so it can be awaited in place or handed to
/// `tokio::spawn`.
pub type DownloadFuture =
    Pin<Box<dyn Future<Output = Result<DownloadReport, FilesError>> + Send + 'static>>;

/// Outcome of a completed download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadReport {
    /// Where the payload now lives.
    pub destination: PathBuf,
    /// Number of payload bytes written.
    pub bytes: u64,
    /// Whether a file already at `destination` was replaced.
    pub replaced: bool,
}

/// Why the application-support directory is not available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    /// The platform has no user-scoped data directory.
    NoPlatformRoot,
    /// The application's display name could not be determined.
    UnknownAppName,
}

/// Result of resolving the application-support directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportDir {
    /// The directory exists at this location.
    Resolved(PathBuf),
    /// The directory does not apply on this host.
    Unavailable(UnavailableReason),
}

/// File-system and network operations behind a swappable seam.
///
/// Callers receive a `Files` implementation at startup (live, recording,
/// replaying, or an [`OverridingFiles`](crate::adapters::overriding::OverridingFiles)
/// built around one of those) and call its operations directly.
pub trait Files: Send + Sync {
    /// Reads the file at `path` as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns a [`FilesErrorKind::Read`](crate::error::FilesErrorKind::Read)
    /// error if the file is missing, unreadable, or not valid UTF-8.
    fn read(&self, path: &Path) -> ReadFuture<'_>;

    /// Returns the temporary directory. Creates nothing.
    fn temporary_directory(&self) -> PathBuf;

    /// Returns a fresh, unique path inside [`Files::temporary_directory`]
    /// ending in `extension`. Creates nothing.
    fn temporary_file(&self, extension: &str) -> PathBuf;

    /// Ensures a directory exists at `path`, creating parents as needed.
    ///
    /// # Errors
    ///
    /// Returns a [`FilesErrorKind::DirectoryCreation`](crate::error::FilesErrorKind::DirectoryCreation)
    /// error if the directory cannot be created.
    fn create_directory(&self, path: &Path) -> Result<(), FilesError>;

    /// Resolves the per-application support directory, creating it if absent.
    ///
    /// # Errors
    ///
    /// Returns an error only when the directory should exist but could not be
    /// created. Hosts where it does not apply yield [`SupportDir::Unavailable`].
    fn resolve_application_support_directory(&self) -> Result<SupportDir, FilesError>;

    /// Like [`Files::resolve_application_support_directory`] but collapses
    /// every failure into `None`, logging the cause.
    fn application_support_directory(&self) -> Option<PathBuf> {
        match self.resolve_application_support_directory() {
            Ok(SupportDir::Resolved(path)) => Some(path),
            Ok(SupportDir::Unavailable(reason)) => {
                error!(?reason, "application support directory unavailable");
                None
            }
            Err(e) => {
                error!(error = %e, "failed to create application support directory");
                None
            }
        }
    }

    /// Fetches `source` and moves the payload to `destination`.
    ///
    /// The returned future must be awaited (or spawned) for anything to
    /// happen. An existing file at `destination` is replaced.
    fn download(&self, source: &Url, destination: &Path) -> DownloadFuture;

    /// Starts [`Files::download`] on the current tokio runtime and returns
    /// immediately. The outcome is only logged.
    fn download_detached(&self, source: &Url, destination: &Path) {
        spawn_detached(source, self.download(source, destination));
    }
}

/// Spawns a download future and logs how it ends.
///
/// Outside a tokio runtime the future is dropped and an error is logged.
pub fn spawn_detached(source: &Url, future: DownloadFuture) {
    let url = source.to_string();
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            handle.spawn(async move {
                match future.await {
                    Ok(report) => info!(
                        %url,
                        destination = %report.destination.display(),
                        bytes = report.bytes,
                        "download finished"
                    ),
                    Err(e) => error!(%url, error = %e, "error downloading file"),
                }
            });
        }
        Err(_) => {
            let e = FilesError::NoRuntime { url };
            error!(error = %e, "download not started");
        }
    }
}
