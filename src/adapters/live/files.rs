//! Live files adapter backed by the host filesystem and `reqwest`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use reqwest::{Client, Url};
use tracing::{debug, info, warn};

use super::app_support::{self, is_plain_name};
use super::download;
use super::id_gen::LiveIdGenerator;
use crate::config::FilesConfig;
use crate::error::FilesError;
use crate::ports::{DownloadFuture, Files, IdGenerator, ReadFuture, SupportDir};

/// Live files adapter.
pub struct LiveFiles {
    config: FilesConfig,
    id_gen: Arc<dyn IdGenerator>,
    client: Client,
}

impl LiveFiles {
    /// Creates a live adapter with the given settings and a UUID-based
    /// generator for temporary file names.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized (for
    /// example when the TLS backend fails to load).
    pub fn new(config: FilesConfig) -> Result<Self, reqwest::Error> {
        let user_agent = config.user_agent.clone().unwrap_or_else(|| {
            format!("files-client/{}", env!("CARGO_PKG_VERSION"))
        });
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self { config, id_gen: Arc::new(LiveIdGenerator), client: builder.build()? })
    }

    /// Replaces the generator used to name temporary files.
    #[must_use]
    pub fn with_id_generator(mut self, id_gen: Arc<dyn IdGenerator>) -> Self {
        self.id_gen = id_gen;
        self
    }

    /// Returns the settings this adapter was built with.
    #[must_use]
    pub fn config(&self) -> &FilesConfig {
        &self.config
    }
}

impl Files for LiveFiles {
    fn read(&self, path: &Path) -> ReadFuture<'_> {
        let path = path.to_path_buf();
        Box::pin(async move {
            let bytes = tokio::fs::read(&path)
                .await
                .map_err(|source| FilesError::Read { path: path.clone(), source })?;
            String::from_utf8(bytes).map_err(|source| FilesError::NotText { path, source })
        })
    }

    fn temporary_directory(&self) -> PathBuf {
        self.config.temp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    fn temporary_file(&self, extension: &str) -> PathBuf {
        let id = self.id_gen.generate_id();
        let extension = extension.strip_prefix('.').unwrap_or(extension);
        let name = if extension.is_empty() {
            id
        } else {
            let candidate = format!("{id}.{extension}");
            if !extension.contains(std::path::is_separator) && is_plain_name(&candidate) {
                candidate
            } else {
                warn!(extension, "extension is not a plain file name suffix, ignoring it");
                id
            }
        };
        self.temporary_directory().join(name)
    }

    fn create_directory(&self, path: &Path) -> Result<(), FilesError> {
        ensure_directory(path).map(|_| ())
    }

    fn resolve_application_support_directory(&self) -> Result<SupportDir, FilesError> {
        let root = self.config.support_root.clone().or_else(dirs::data_dir);
        app_support::resolve(root, self.config.app_name.as_deref())
    }

    fn download(&self, source: &Url, destination: &Path) -> DownloadFuture {
        let staging = self.temporary_file("download");
        debug!(%source, staging = %staging.display(), "starting download");
        Box::pin(download::fetch_into(
            self.client.clone(),
            source.clone(),
            staging,
            destination.to_path_buf(),
        ))
    }
}

/// Creates `path` and any missing parents. Returns `true` if anything was
/// created.
///
/// An existing directory is left alone. Safe to race with other callers
/// creating the same path.
pub(crate) fn ensure_directory(path: &Path) -> Result<bool, FilesError> {
    if path.is_dir() {
        info!(path = %path.display(), "directory already exists");
        return Ok(false);
    }
    std::fs::create_dir_all(path)
        .map_err(|source| FilesError::DirectoryCreation { path: path.to_path_buf(), source })?;
    info!(path = %path.display(), "created directory");
    Ok(true)
}
