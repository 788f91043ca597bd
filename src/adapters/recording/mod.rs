//! Recording adapters that capture interactions to cassettes.

pub mod files;
pub mod id_gen;

use std::sync::{Arc, Mutex};

use serde::Serialize;

pub use files::RecordingFiles;
pub use id_gen::RecordingIdGenerator;

use crate::cassette::recorder::CassetteRecorder;
use crate::error::FilesError;

/// Record an interaction with an infallible return value.
pub(crate) fn record_interaction<I, O>(
    recorder: &Mutex<CassetteRecorder>,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize,
    O: Serialize,
{
    let input_json = serde_json::to_value(input).expect("failed to serialize recording input");
    let output_json = serde_json::to_value(output).expect("failed to serialize recording output");

    let mut guard = recorder.lock().expect("recorder lock poisoned");
    guard.record(port, method, input_json, output_json);
}

/// Record a fallible interaction.
///
/// `Ok(v)` is stored as `{"ok": v}` and `Err(e)` as
/// `{"err": {"kind": e.kind(), "message": e.to_string()}}`.
pub(crate) fn record_result<T, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, FilesError>,
) where
    T: Serialize,
    I: Serialize,
{
    let output = match result {
        Ok(v) => serde_json::json!({ "ok": v }),
        Err(e) => serde_json::json!({
            "err": { "kind": e.kind(), "message": e.to_string() }
        }),
    };
    record_interaction(recorder, port, method, input, &output);
}
