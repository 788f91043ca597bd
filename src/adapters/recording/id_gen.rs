//! Recording adapter for the `IdGenerator` port.

use std::sync::{Arc, Mutex};

use super::record_interaction;
use crate::cassette::format::ID_GEN_PORT;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::IdGenerator;

/// Records generated IDs while delegating to an inner implementation.
pub struct RecordingIdGenerator {
    inner: Box<dyn IdGenerator>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingIdGenerator {
    /// Wraps `inner`, writing interactions to `recorder`.
    pub fn new(inner: Box<dyn IdGenerator>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl IdGenerator for RecordingIdGenerator {
    fn generate_id(&self) -> String {
        let id = self.inner.generate_id();
        record_interaction(&self.recorder, ID_GEN_PORT, "generate_id", &serde_json::json!({}), &id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::LiveIdGenerator;

    #[test]
    fn records_each_generated_id() {
        let dir = tempfile::tempdir().unwrap();
        let recorder =
            Arc::new(Mutex::new(CassetteRecorder::new(dir.path().join("ids.yaml"), "ids")));
        let gen = RecordingIdGenerator::new(Box::new(LiveIdGenerator), Arc::clone(&recorder));

        let first = gen.generate_id();
        let second = gen.generate_id();
        assert_ne!(first, second);
        assert_eq!(recorder.lock().unwrap().len(), 2);
    }
}
