// crates/veritas-core/src/evaluation.rs
//
// The evaluation result record and its discrete labels.
//
// A result is created once per call to the evaluator and never mutated
// afterwards. Display and storage layers serialize it as they see fit.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::language::Language;

/// Entropy band a scored text falls into, in ascending severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntropyStatus {
    /// The text was rejected before scoring (see `EvaluationResult::error`).
    Unscored,
    /// Stable logical signal.
    Trusted,
    /// Acceptable structured information.
    Acceptable,
    /// Suspicious emotional rhetoric.
    Suspicious,
    /// High level of manipulation.
    Warning,
    /// Critical informational chaos (also forced by any chaos marker).
    Critical,
}

impl EntropyStatus {
    /// Uppercase label used on the wire and in reports.
    pub fn label(&self) -> &'static str {
        match self {
            EntropyStatus::Unscored => "UNSCORED",
            EntropyStatus::Trusted => "TRUSTED",
            EntropyStatus::Acceptable => "ACCEPTABLE",
            EntropyStatus::Suspicious => "SUSPICIOUS",
            EntropyStatus::Warning => "WARNING",
            EntropyStatus::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for EntropyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Operational state of a source, derived from its reputation alone.
///
/// This is a pure function of the current reputation value, not a state
/// machine: no history of earlier states influences it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceState {
    /// Consistently high-quality logical signal.
    StableTrust,
    /// Operating normally under routine monitoring.
    Monitored,
    /// Elevated entropy observed; review recommended.
    Warning,
    /// Critical decline in quality; intervention needed.
    Critical,
    /// Isolated after systematic integrity violations.
    Quarantine,
}

impl SourceState {
    /// Uppercase label used on the wire and in reports.
    pub fn label(&self) -> &'static str {
        match self {
            SourceState::StableTrust => "STABLE_TRUST",
            SourceState::Monitored => "MONITORED",
            SourceState::Warning => "WARNING",
            SourceState::Critical => "CRITICAL",
            SourceState::Quarantine => "QUARANTINE",
        }
    }

    /// Operational decision attached to this state.
    pub fn action(&self) -> OperationalAction {
        match self {
            SourceState::StableTrust => OperationalAction::Allow,
            SourceState::Monitored => OperationalAction::Monitor,
            SourceState::Warning => OperationalAction::Review,
            SourceState::Critical => OperationalAction::Restrict,
            SourceState::Quarantine => OperationalAction::Quarantine,
        }
    }
}

impl fmt::Display for SourceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What an operator or downstream system should do with a source's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationalAction {
    Allow,
    Monitor,
    Review,
    Restrict,
    Quarantine,
}

impl fmt::Display for OperationalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OperationalAction::Allow => "ALLOW",
            OperationalAction::Monitor => "MONITOR",
            OperationalAction::Review => "REVIEW",
            OperationalAction::Restrict => "RESTRICT",
            OperationalAction::Quarantine => "QUARANTINE",
        };
        f.write_str(s)
    }
}

/// Which branch of the slashing/reward policy fired for an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlashOutcome {
    /// Entropy exceeded the warning threshold; `amount` was subtracted
    /// (before clamping).
    Penalized { amount: f64 },
    /// Entropy fell below the trusted threshold; `amount` was added
    /// (before clamping).
    Rewarded { amount: f64 },
    /// Entropy fell between the two thresholds.
    Unchanged,
    /// No adjustment was attempted (the text was rejected before scoring).
    Skipped,
}

/// A per-call problem, reported inside the result rather than raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EvaluationIssue {
    /// Trimmed text is shorter than the configured minimum.
    EmptyInput { chars: usize, minimum: usize },
    /// The caller's language hint is not supported; the default vocabulary
    /// was used instead.
    UnsupportedLanguage { hint: String },
}

impl fmt::Display for EvaluationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationIssue::EmptyInput { chars, minimum } => write!(
                f,
                "text too short: {} characters, minimum is {}",
                chars, minimum
            ),
            EvaluationIssue::UnsupportedLanguage { hint } => {
                write!(f, "unsupported language hint {:?}, using default vocabulary", hint)
            }
        }
    }
}

/// Intermediate quantities of the entropy pipeline, exposed for
/// observability and tests.
///
/// When the chaos short-circuit fires only `char_count`, `word_count` and
/// `chaos_markers` are measured; every other component is reported as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Unicode scalar values in the trimmed text.
    pub char_count: usize,
    /// Word tokens in the lowercased text.
    pub word_count: usize,
    /// Normalized Shannon entropy of the character distribution, [0, 1].
    pub character_entropy: f64,
    /// 1 - vocabulary diversity (after long-text damping), [0, 1].
    pub complexity: f64,
    /// Noise-marker token hits.
    pub noise_markers: usize,
    /// Signal-marker token hits.
    pub signal_markers: usize,
    /// Chaos-marker hits.
    pub chaos_markers: usize,
    /// noise / (signal + noise + 1), or 0 when no markers were found.
    pub marker_ratio: f64,
    /// Numeric tokens per word.
    pub numeric_density: f64,
    /// Normalized emphasis (caps words, `!`, `?`), [0, 1].
    pub shout_factor: f64,
    /// Penalty for co-occurring incompatible concepts.
    pub sanity_penalty: f64,
    /// Whether the academic/technical calibration discount was applied.
    pub calibrated: bool,
    /// Whether the chaos short-circuit fired.
    pub chaos_short_circuit: bool,
}

/// Human-facing guidance derived from a scored result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Localized one-line guidance keyed on the status.
    pub message: String,
    /// Localized "use"/"avoid" decision.
    pub action: String,
    /// Localized five-level trust label keyed on entropy.
    pub trust_level: String,
    /// Whether the reader should apply critical reading.
    pub critical_thinking_required: bool,
}

/// The full outcome of one call to the integrity evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Time-ordered identifier a history store can key on.
    pub evaluation_id: Uuid,
    /// When the evaluation ran.
    pub evaluated_at: DateTime<Utc>,
    /// Declared source of the text.
    pub source_id: String,
    /// Language whose vocabulary scored the text.
    pub language: Language,
    /// SHA-256 of the trimmed text, hex-encoded.
    pub text_digest: String,
    /// Composite entropy in [0, 0.999]. Zero when unscored.
    pub entropy_index: f64,
    /// Source reputation before this evaluation.
    pub reputation_before: f64,
    /// Source reputation after slashing/reward, in [0, 1].
    pub reputation_after: f64,
    /// Which slashing branch fired.
    pub slashing: SlashOutcome,
    /// Entropy band.
    pub status: EntropyStatus,
    /// Localized verdict for the entropy band.
    pub verdict: String,
    /// Reputation band of the source after the update.
    pub source_state: SourceState,
    /// Operational action for `source_state`.
    pub source_action: OperationalAction,
    /// Whether the result needs manual review.
    pub intervention_required: bool,
    /// Whether a chaos marker forced the most severe classification.
    pub chaos_detected: bool,
    /// Component metrics.
    pub diagnostics: Diagnostics,
    /// Guidance for readers; absent when unscored.
    pub recommendation: Option<Recommendation>,
    /// Set when the call could not score the text.
    pub error: Option<EvaluationIssue>,
    /// Soft problems that were worked around.
    #[serde(default)]
    pub warnings: Vec<EvaluationIssue>,
}

impl EvaluationResult {
    /// Whether the call failed to score the text.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
