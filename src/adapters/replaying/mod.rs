//! Replaying adapters that serve recorded interactions.

pub mod files;
pub mod id_gen;

use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Deserialize;

pub use files::ReplayingFiles;
pub use id_gen::ReplayingIdGenerator;

use crate::cassette::replayer::CassetteReplayer;
use crate::error::{FilesError, FilesErrorKind};

/// Takes the output of the next recorded interaction for `port::method`.
pub(crate) fn next_output(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
) -> serde_json::Value {
    let mut guard = replayer.lock().expect("replayer lock poisoned");
    guard.next_interaction(port, method).output
}

/// Deserializes a plain recorded value.
///
/// # Panics
///
/// Panics if the cassette holds a value of the wrong shape.
pub(crate) fn replay_value<T: DeserializeOwned>(output: serde_json::Value, context: &str) -> T {
    serde_json::from_value(output)
        .unwrap_or_else(|e| panic!("{context}: recorded output has unexpected shape: {e}"))
}

#[derive(Deserialize)]
struct RecordedError {
    kind: FilesErrorKind,
    message: String,
}

/// Rebuilds a recorded `Result`.
///
/// `{"err": {...}}` becomes [`FilesError::Replayed`]; anything else is read
/// from `{"ok": value}`.
///
/// # Panics
///
/// Panics if the cassette holds a value of the wrong shape.
pub(crate) fn replay_result<T: DeserializeOwned>(
    mut output: serde_json::Value,
    context: &str,
) -> Result<T, FilesError> {
    if let Some(err) = output.get_mut("err").map(serde_json::Value::take) {
        let recorded: RecordedError = replay_value(err, context);
        return Err(FilesError::Replayed { kind: recorded.kind, message: recorded.message });
    }
    let ok = output.get_mut("ok").map_or(serde_json::Value::Null, serde_json::Value::take);
    Ok(replay_value(ok, context))
}
