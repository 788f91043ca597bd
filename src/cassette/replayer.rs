//! Replays recorded interactions from a cassette.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction};

/// Serves a cassette's interactions in order, one queue per port/method pair.
///
/// Calls to different methods do not disturb each other's position, so a
/// caller may interleave them differently from the recording.
pub struct CassetteReplayer {
    queues: HashMap<(String, String), VecDeque<Interaction>>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<(String, String), VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            queues
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push_back(interaction.clone());
        }
        Self { queues }
    }

    /// Number of interactions not yet served.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }

    /// Takes the next interaction for the given port and method.
    ///
    /// # Panics
    ///
    /// Panics if the cassette never recorded this port/method pair, or if all
    /// of its interactions have already been served. The message lists what
    /// the cassette does contain.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Interaction {
        let key = (port.to_string(), method.to_string());
        let Some(queue) = self.queues.get_mut(&key) else {
            let mut available: Vec<String> =
                self.queues.keys().map(|(p, m)| format!("{p}::{m}")).collect();
            available.sort();
            panic!(
                "Cassette exhausted: no interactions recorded for port={port:?} method={method:?}. \
                 Available port::method pairs: [{}]",
                available.join(", ")
            );
        };

        queue.pop_front().unwrap_or_else(|| {
            panic!(
                "Cassette exhausted: every interaction for port={port:?} method={method:?} \
                 has been consumed"
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn interaction(seq: u64, port: &str, method: &str, output: serde_json::Value) -> Interaction {
        Interaction { seq, port: port.into(), method: method.into(), input: json!({}), output }
    }

    fn make_cassette(interactions: Vec<Interaction>) -> Cassette {
        Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            recorder_version: "0.1.0".into(),
            interactions,
        }
    }

    #[test]
    fn serves_each_method_in_recorded_order() {
        let cassette = make_cassette(vec![
            interaction(0, "id_gen", "generate_id", json!("first")),
            interaction(1, "files", "temporary_directory", json!("/tmp")),
            interaction(2, "id_gen", "generate_id", json!("second")),
        ]);
        let mut replayer = CassetteReplayer::new(&cassette);
        assert_eq!(replayer.remaining(), 3);

        assert_eq!(replayer.next_interaction("files", "temporary_directory").seq, 1);
        assert_eq!(replayer.next_interaction("id_gen", "generate_id").output, json!("first"));
        assert_eq!(replayer.next_interaction("id_gen", "generate_id").output, json!("second"));
        assert_eq!(replayer.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "has been consumed")]
    fn exhausted_method_panics() {
        let cassette = make_cassette(vec![interaction(0, "files", "read", json!({"ok": "x"}))]);
        let mut replayer = CassetteReplayer::new(&cassette);
        let _ = replayer.next_interaction("files", "read");
        let _ = replayer.next_interaction("files", "read");
    }

    #[test]
    #[should_panic(expected = "Available port::method pairs: [files::read]")]
    fn unknown_method_lists_what_is_available() {
        let cassette = make_cassette(vec![interaction(0, "files", "read", json!({"ok": "x"}))]);
        let mut replayer = CassetteReplayer::new(&cassette);
        let _ = replayer.next_interaction("files", "download");
    }
}
