//! Per-operation overrides on top of any `Files` implementation.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use reqwest::Url;

use crate::error::FilesError;
use crate::ports::{DownloadFuture, Files, ReadFuture, SupportDir};

type ReadFn = dyn Fn(&Path) -> ReadFuture<'static> + Send + Sync;
type TemporaryDirectoryFn = dyn Fn() -> PathBuf + Send + Sync;
type TemporaryFileFn = dyn Fn(&str) -> PathBuf + Send + Sync;
type CreateDirectoryFn = dyn Fn(&Path) -> Result<(), FilesError> + Send + Sync;
type SupportDirFn = dyn Fn() -> Result<SupportDir, FilesError> + Send + Sync;
type DownloadFn = dyn Fn(&Url, &Path) -> DownloadFuture + Send + Sync;

/// Wraps a base implementation and replaces selected operations.
///
/// Each `with_*` call swaps exactly one operation; everything left alone is
/// delegated to the base.
///
/// ```
/// use std::path::PathBuf;
/// use std::sync::Arc;
///
/// use files_client::adapters::overriding::OverridingFiles;
/// use files_client::adapters::unimplemented::UnimplementedFiles;
/// use files_client::ports::Files;
///
/// let files = OverridingFiles::new(Arc::new(UnimplementedFiles))
///     .with_temporary_directory(|| PathBuf::from("/scratch"));
/// assert_eq!(files.temporary_directory(), PathBuf::from("/scratch"));
/// ```
pub struct OverridingFiles {
    base: Arc<dyn Files>,
    read: Option<Box<ReadFn>>,
    temporary_directory: Option<Box<TemporaryDirectoryFn>>,
    temporary_file: Option<Box<TemporaryFileFn>>,
    create_directory: Option<Box<CreateDirectoryFn>>,
    application_support_directory: Option<Box<SupportDirFn>>,
    download: Option<Box<DownloadFn>>,
}

impl OverridingFiles {
    /// Starts with every operation delegated to `base`.
    #[must_use]
    pub fn new(base: Arc<dyn Files>) -> Self {
        Self {
            base,
            read: None,
            temporary_directory: None,
            temporary_file: None,
            create_directory: None,
            application_support_directory: None,
            download: None,
        }
    }

    /// Overrides [`Files::read`].
    #[must_use]
    pub fn with_read(
        mut self,
        f: impl Fn(&Path) -> ReadFuture<'static> + Send + Sync + 'static,
    ) -> Self {
        self.read = Some(Box::new(f));
        self
    }

    /// Overrides [`Files::temporary_directory`].
    #[must_use]
    pub fn with_temporary_directory(
        mut self,
        f: impl Fn() -> PathBuf + Send + Sync + 'static,
    ) -> Self {
        self.temporary_directory = Some(Box::new(f));
        self
    }

    /// Overrides [`Files::temporary_file`].
    #[must_use]
    pub fn with_temporary_file(
        mut self,
        f: impl Fn(&str) -> PathBuf + Send + Sync + 'static,
    ) -> Self {
        self.temporary_file = Some(Box::new(f));
        self
    }

    /// Overrides [`Files::create_directory`].
    #[must_use]
    pub fn with_create_directory(
        mut self,
        f: impl Fn(&Path) -> Result<(), FilesError> + Send + Sync + 'static,
    ) -> Self {
        self.create_directory = Some(Box::new(f));
        self
    }

    /// Overrides [`Files::resolve_application_support_directory`], and with
    /// it [`Files::application_support_directory`].
    #[must_use]
    pub fn with_application_support_directory(
        mut self,
        f: impl Fn() -> Result<SupportDir, FilesError> + Send + Sync + 'static,
    ) -> Self {
        self.application_support_directory = Some(Box::new(f));
        self
    }

    /// Overrides [`Files::download`], and with it [`Files::download_detached`].
    #[must_use]
    pub fn with_download(
        mut self,
        f: impl Fn(&Url, &Path) -> DownloadFuture + Send + Sync + 'static,
    ) -> Self {
        self.download = Some(Box::new(f));
        self
    }
}

impl Files for OverridingFiles {
    fn read(&self, path: &Path) -> ReadFuture<'_> {
        match &self.read {
            Some(f) => f(path),
            None => self.base.read(path),
        }
    }

    fn temporary_directory(&self) -> PathBuf {
        match &self.temporary_directory {
            Some(f) => f(),
            None => self.base.temporary_directory(),
        }
    }

    fn temporary_file(&self, extension: &str) -> PathBuf {
        match &self.temporary_file {
            Some(f) => f(extension),
            None => self.base.temporary_file(extension),
        }
    }

    fn create_directory(&self, path: &Path) -> Result<(), FilesError> {
        match &self.create_directory {
            Some(f) => f(path),
            None => self.base.create_directory(path),
        }
    }

    fn resolve_application_support_directory(&self) -> Result<SupportDir, FilesError> {
        match &self.application_support_directory {
            Some(f) => f(),
            None => self.base.resolve_application_support_directory(),
        }
    }

    fn download(&self, source: &Url, destination: &Path) -> DownloadFuture {
        match &self.download {
            Some(f) => f(source, destination),
            None => self.base.download(source, destination),
        }
    }
}
