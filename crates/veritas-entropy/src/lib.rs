// crates/veritas-entropy/src/lib.rs
//
// veritas-entropy: Marker lexicon, language detection, and composite entropy
// scoring for the Veritas integrity engine.
//
// The entropy index is a deterministic, rule-based heuristic in [0, 0.999]:
// 0 is maximally logical/factual text, values near 1 indicate rhetorical or
// manipulative content. It is not a statistical classifier.

pub mod calculator;
pub mod detector;
pub mod lexicon;
pub mod signals;
pub mod tokens;

// Re-export key types for ergonomic access from downstream crates.
pub use calculator::{
    clamp_entropy, EntropyCalculator, EntropyReport, TextTooShort, CHAOS_ENTROPY,
    MAX_ENTROPY_INDEX,
};
pub use detector::LanguageDetector;
pub use lexicon::{Lexicon, MarkerSet, Vocabulary};
pub use tokens::TokenizedText;
