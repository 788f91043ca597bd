//! Recording adapter for the `Files` port.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use reqwest::Url;
use serde::Serialize;

use super::{record_interaction, record_result};
use crate::cassette::format::FILES_PORT;
use crate::cassette::recorder::CassetteRecorder;
use crate::error::FilesError;
use crate::ports::{DownloadFuture, Files, ReadFuture, SupportDir};

/// Records every `Files` call while delegating to an inner implementation.
///
/// Downloads are recorded when their future completes, so a detached download
/// keeps the recorder alive until it finishes.
pub struct RecordingFiles {
    inner: Box<dyn Files>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingFiles {
    /// Wraps `inner`, writing interactions to `recorder`.
    pub fn new(inner: Box<dyn Files>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct PathInput<'a> {
    path: &'a Path,
}

#[derive(Serialize)]
struct ExtensionInput<'a> {
    extension: &'a str,
}

#[derive(Serialize)]
struct DownloadInput {
    source: String,
    destination: PathBuf,
}

#[derive(Serialize)]
struct NoInput {}

impl Files for RecordingFiles {
    fn read(&self, path: &Path) -> ReadFuture<'_> {
        let path = path.to_path_buf();
        Box::pin(async move {
            let result = self.inner.read(&path).await;
            record_result(&self.recorder, FILES_PORT, "read", &PathInput { path: &path }, &result);
            result
        })
    }

    fn temporary_directory(&self) -> PathBuf {
        let dir = self.inner.temporary_directory();
        record_interaction(&self.recorder, FILES_PORT, "temporary_directory", &NoInput {}, &dir);
        dir
    }

    fn temporary_file(&self, extension: &str) -> PathBuf {
        let path = self.inner.temporary_file(extension);
        let input = ExtensionInput { extension };
        record_interaction(&self.recorder, FILES_PORT, "temporary_file", &input, &path);
        path
    }

    fn create_directory(&self, path: &Path) -> Result<(), FilesError> {
        let result = self.inner.create_directory(path);
        record_result(&self.recorder, FILES_PORT, "create_directory", &PathInput { path }, &result);
        result
    }

    fn resolve_application_support_directory(&self) -> Result<SupportDir, FilesError> {
        let result = self.inner.resolve_application_support_directory();
        record_result(
            &self.recorder,
            FILES_PORT,
            "application_support_directory",
            &NoInput {},
            &result,
        );
        result
    }

    fn download(&self, source: &Url, destination: &Path) -> DownloadFuture {
        let inner = self.inner.download(source, destination);
        let recorder = Arc::clone(&self.recorder);
        let input =
            DownloadInput { source: source.to_string(), destination: destination.to_path_buf() };

        Box::pin(async move {
            let result = inner.await;
            record_result(&recorder, FILES_PORT, "download", &input, &result);
            result
        })
    }
}
