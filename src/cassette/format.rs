//! Cassette data structures for recording and replaying interactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Port name used for [`Files`](crate::ports::Files) interactions.
pub const FILES_PORT: &str = "files";
/// Port name used for [`IdGenerator`](crate::ports::IdGenerator) interactions.
pub const ID_GEN_PORT: &str = "id_gen";

/// A single recorded call on a port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Sequence number (assigned automatically by the recorder).
    pub seq: u64,
    /// Port name, `files` or `id_gen`.
    pub port: String,
    /// Method name invoked on the port.
    pub method: String,
    /// Arguments passed to the method.
    pub input: serde_json::Value,
    /// Value returned by the method. Fallible methods use
    /// `{"ok": value}` or `{"err": {"kind": ..., "message": ...}}`.
    pub output: serde_json::Value,
}

/// A named, ordered list of recorded interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Version of this crate that produced the recording.
    pub recorder_version: String,
    /// Ordered list of interactions.
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// Parses a cassette from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid cassette document.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Returns the interactions recorded for `port`, in order.
    pub fn for_port<'a>(&'a self, port: &'a str) -> impl Iterator<Item = &'a Interaction> + 'a {
        self.interactions.iter().filter(move |i| i.port == port)
    }
}
