//! Cassette configuration for composable per-port replay.

use std::path::{Path, PathBuf};

use tracing::warn;

use super::format::Cassette;
use super::replayer::CassetteReplayer;

/// Per-port cassette file paths. Ports without a path are served by the
/// unimplemented doubles, which panic when called.
#[derive(Debug, Clone, Default)]
pub struct CassetteConfig {
    /// Cassette for the `files` port.
    pub files: Option<PathBuf>,
    /// Cassette for the `id_gen` port.
    pub id_gen: Option<PathBuf>,
}

/// Replayers loaded from a [`CassetteConfig`].
pub struct PortReplayers {
    /// Replayer for the `files` port.
    pub files: Option<CassetteReplayer>,
    /// Replayer for the `id_gen` port.
    pub id_gen: Option<CassetteReplayer>,
}

impl CassetteConfig {
    /// Points both ports at cassettes named `<port>.cassette.yaml` in `dir`,
    /// the layout written by a recording session.
    #[must_use]
    pub fn from_dir(dir: &Path) -> Self {
        Self {
            files: Some(dir.join("files.cassette.yaml")),
            id_gen: Some(dir.join("id_gen.cassette.yaml")),
        }
    }

    /// Reads and parses a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_cassette(path: &Path) -> Result<Cassette, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        Cassette::from_yaml(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))
    }

    /// Loads every configured cassette.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn load_all(&self) -> Result<PortReplayers, String> {
        Ok(PortReplayers {
            files: self.files.as_deref().map(|p| load_port(p, "files")).transpose()?,
            id_gen: self.id_gen.as_deref().map(|p| load_port(p, "id_gen")).transpose()?,
        })
    }
}

fn load_port(path: &Path, port: &str) -> Result<CassetteReplayer, String> {
    let cassette = CassetteConfig::load_cassette(path)?;
    if cassette.for_port(port).next().is_none() {
        warn!(path = %path.display(), port, "cassette has no interactions for this port");
    }
    Ok(CassetteReplayer::new(&cassette))
}
