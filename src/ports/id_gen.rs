//! ID generator port for producing unique identifiers.

/// Generates unique identifiers.
///
/// The live files adapter names temporary files with these, so replacing the
/// generator makes temporary paths predictable in tests and replays.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier string.
    fn generate_id(&self) -> String;
}
