//! Replaying adapter for the `IdGenerator` port.

use std::sync::Mutex;

use super::{next_output, replay_value};
use crate::cassette::format::ID_GEN_PORT;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::IdGenerator;

/// Replays recorded IDs from a cassette.
pub struct ReplayingIdGenerator {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingIdGenerator {
    /// Creates a new replaying ID generator from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl IdGenerator for ReplayingIdGenerator {
    fn generate_id(&self) -> String {
        replay_value(next_output(&self.replayer, ID_GEN_PORT, "generate_id"), "id_gen::generate_id")
    }
}
