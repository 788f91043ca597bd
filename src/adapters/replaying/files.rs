//! Replaying adapter for the `Files` port.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use reqwest::Url;

use super::{next_output, replay_result, replay_value};
use crate::cassette::format::FILES_PORT;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::FilesError;
use crate::ports::{DownloadFuture, Files, ReadFuture, SupportDir};

/// Serves recorded `Files` results without touching disk or network.
///
/// Arguments are ignored; each method returns its next recorded output.
/// Replayed downloads report what was recorded but write nothing.
pub struct ReplayingFiles {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingFiles {
    /// Creates a replaying adapter from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }

    fn next(&self, method: &str) -> serde_json::Value {
        next_output(&self.replayer, FILES_PORT, method)
    }
}

impl Files for ReplayingFiles {
    fn read(&self, _path: &Path) -> ReadFuture<'_> {
        let output = self.next("read");
        Box::pin(async move { replay_result(output, "files::read") })
    }

    fn temporary_directory(&self) -> PathBuf {
        replay_value(self.next("temporary_directory"), "files::temporary_directory")
    }

    fn temporary_file(&self, _extension: &str) -> PathBuf {
        replay_value(self.next("temporary_file"), "files::temporary_file")
    }

    fn create_directory(&self, _path: &Path) -> Result<(), FilesError> {
        replay_result(self.next("create_directory"), "files::create_directory")
    }

    fn resolve_application_support_directory(&self) -> Result<SupportDir, FilesError> {
        replay_result(
            self.next("application_support_directory"),
            "files::application_support_directory",
        )
    }

    fn download(&self, _source: &Url, _destination: &Path) -> DownloadFuture {
        let output = self.next("download");
        Box::pin(async move { replay_result(output, "files::download") })
    }
}
