// crates/veritas-core/src/lib.rs
//
// veritas-core: Core types, configuration, and traits for the Veritas
// integrity engine.
//
// This is the leaf crate the rest of the workspace depends on. It defines the
// evaluation result record, source records, language tags, the validated
// engine configuration, the error type, and the reputation store interface.

pub mod config;
pub mod digest;
pub mod error;
pub mod evaluation;
pub mod language;
pub mod record;
pub mod traits;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use veritas_core::EvaluationResult;`

pub use config::{
    CompositeWeights, EngineConfig, EntropyThresholds, ReputationBands, SlashingConfig,
    OVERRIDE_KEYS,
};
pub use digest::text_digest;
pub use error::VeritasError;
pub use evaluation::{
    Diagnostics, EntropyStatus, EvaluationIssue, EvaluationResult, OperationalAction,
    Recommendation, SlashOutcome, SourceState,
};
pub use language::Language;
pub use record::{clamp_reputation, SourceRecord, DEFAULT_REPUTATION};
pub use traits::ReputationStore;
