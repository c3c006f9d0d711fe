// crates/veritas-core/src/error.rs

use thiserror::Error;

/// Engine-wide error types for the Veritas integrity engine.
///
/// Per-evaluation input problems (short text, unknown language hint) are not
/// errors; they travel inside `EvaluationResult` as `EvaluationIssue`s.
#[derive(Debug, Error)]
pub enum VeritasError {
    /// Configuration violates an ordering or range invariant.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Reputation store backend error (poisoned lock, durable backend I/O).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Caller supplied a value the engine cannot interpret.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for VeritasError {
    fn from(e: serde_json::Error) -> Self {
        VeritasError::Serialization(e.to_string())
    }
}
