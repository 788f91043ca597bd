//! Service context bundling the port trait objects a host application injects.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::adapters::live::{LiveFiles, LiveIdGenerator};
use crate::adapters::recording::{RecordingFiles, RecordingIdGenerator};
use crate::adapters::replaying::{ReplayingFiles, ReplayingIdGenerator};
use crate::adapters::unimplemented::{UnimplementedFiles, UnimplementedIdGenerator};
use crate::cassette::config::CassetteConfig;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::config::FilesConfig;
use crate::ports::{Files, IdGenerator};

/// Bundles the ports into a single injectable value.
///
/// Constructors wire up live, recording, or replaying adapters. Tests that
/// need a hand-made double can build the struct directly.
pub struct ServiceContext {
    /// File-system and download operations.
    pub files: Arc<dyn Files>,
    /// Unique identifiers.
    pub id_gen: Arc<dyn IdGenerator>,
}

impl ServiceContext {
    /// Creates a live context.
    ///
    /// The files adapter names its temporary files with the same generator
    /// exposed as `id_gen`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn live(config: FilesConfig) -> Result<Self, String> {
        let id_gen: Arc<dyn IdGenerator> = Arc::new(LiveIdGenerator);
        let files = LiveFiles::new(config)
            .map_err(|e| format!("Failed to initialize HTTP client: {e}"))?
            .with_id_generator(Arc::clone(&id_gen));
        Ok(Self { files: Arc::new(files), id_gen })
    }

    /// Creates a recording context that captures live interactions into
    /// `<dir>/<port>.cassette.yaml`.
    ///
    /// Temporary file names come from a separate, unrecorded generator: the
    /// `files` cassette already holds the paths, and the `id_gen` cassette
    /// must only hold IDs the caller asked for.
    ///
    /// Drop the context, then call [`RecordingSession::finish`] to write the
    /// cassettes.
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory or HTTP client cannot be set up.
    pub fn recording_at(
        dir: impl Into<PathBuf>,
        config: FilesConfig,
    ) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::new(dir)?;
        let id_gen: Arc<dyn IdGenerator> = Arc::new(RecordingIdGenerator::new(
            Box::new(LiveIdGenerator),
            Arc::clone(&session.id_gen),
        ));
        let live = LiveFiles::new(config)
            .map_err(|e| format!("Failed to initialize HTTP client: {e}"))?;
        let files = RecordingFiles::new(Box::new(live), Arc::clone(&session.files));
        Ok((Self { files: Arc::new(files), id_gen }, session))
    }

    /// Creates a replaying context from a single cassette holding every port.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = CassetteConfig::load_cassette(path)?;
        Ok(Self {
            files: Arc::new(ReplayingFiles::new(CassetteReplayer::new(&cassette))),
            id_gen: Arc::new(ReplayingIdGenerator::new(CassetteReplayer::new(&cassette))),
        })
    }

    /// Creates a replaying context from per-port cassettes. Ports without a
    /// cassette panic when called.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;
        Ok(Self {
            files: match replayers.files {
                Some(r) => Arc::new(ReplayingFiles::new(r)),
                None => Arc::new(UnimplementedFiles),
            },
            id_gen: match replayers.id_gen {
                Some(r) => Arc::new(ReplayingIdGenerator::new(r)),
                None => Arc::new(UnimplementedIdGenerator),
            },
        })
    }

    /// Creates a context in which every call panics.
    #[must_use]
    pub fn unimplemented() -> Self {
        Self { files: Arc::new(UnimplementedFiles), id_gen: Arc::new(UnimplementedIdGenerator) }
    }
}
