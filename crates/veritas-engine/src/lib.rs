// crates/veritas-engine/src/lib.rs
//
// veritas-engine: The integrity evaluator.
//
// Combines language detection, entropy scoring, the reputation ledger, and
// status classification behind two operations: `evaluate` and
// `get_reputation`.

pub mod classifier;
pub mod evaluator;
pub mod verdicts;

pub use classifier::{Classification, StatusClassifier};
pub use evaluator::IntegrityEvaluator;
pub use verdicts::{recommendation, trust_level, verdict};

// Re-exported so collaborators need only this crate.
pub use veritas_core::{
    EngineConfig, EntropyStatus, EvaluationIssue, EvaluationResult, Language, SourceState,
    VeritasError,
};
