// crates/veritas-engine/src/evaluator.rs
//
// The integrity evaluator: the single entry point that turns raw text into
// an entropy score, a reputation update, and a classification.
//
// Pipeline per call:
//   1. Resolve the language (valid hint, detection, or default on a bad hint).
//   2. Score the text. A too-short text ends here with an error result and
//      no reputation change.
//   3. Apply slashing/reward to the source (the only mutation).
//   4. Classify on both axes and attach reader guidance.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use veritas_core::{
    text_digest, Diagnostics, EngineConfig, EvaluationIssue, EvaluationResult, Language,
    ReputationStore, SlashOutcome, SourceState, VeritasError,
};
use veritas_entropy::{EntropyCalculator, LanguageDetector, Lexicon, TextTooShort};
use veritas_reputation::{InMemoryReputationStore, ReputationLedger};

use crate::classifier::StatusClassifier;
use crate::verdicts;

/// Scores text and maintains source reputation.
///
/// All methods take `&self`; the evaluator can be shared across threads
/// behind an `Arc`. Concurrent evaluations of the same source are serialized
/// by the reputation store.
#[derive(Debug)]
pub struct IntegrityEvaluator {
    config: EngineConfig,
    detector: LanguageDetector,
    calculator: EntropyCalculator,
    ledger: ReputationLedger,
    classifier: StatusClassifier,
}

impl IntegrityEvaluator {
    /// Build an evaluator with a fresh in-memory reputation registry.
    pub fn new(config: EngineConfig) -> Result<Self, VeritasError> {
        Self::with_store(config, Arc::new(InMemoryReputationStore::new()))
    }

    /// Build an evaluator over an existing reputation store.
    ///
    /// Fails with `VeritasError::Configuration` if `config` violates any
    /// ordering or range invariant.
    pub fn with_store(
        config: EngineConfig,
        store: Arc<dyn ReputationStore>,
    ) -> Result<Self, VeritasError> {
        Self::with_lexicon(config, store, Arc::new(Lexicon::builtin()))
    }

    /// Build an evaluator with a custom marker lexicon.
    pub fn with_lexicon(
        config: EngineConfig,
        store: Arc<dyn ReputationStore>,
        lexicon: Arc<Lexicon>,
    ) -> Result<Self, VeritasError> {
        config.validate()?;
        let detector = LanguageDetector::new(lexicon.clone(), config.default_language);
        let calculator = EntropyCalculator::new(lexicon, &config)?;
        let ledger = ReputationLedger::new(store, &config)?;
        let classifier = StatusClassifier::from_config(&config);

        debug!(
            min_text_chars = config.min_text_chars,
            default_language = %config.default_language,
            seeded = config.seed_sources.len(),
            "Integrity evaluator ready"
        );

        Ok(Self {
            config,
            detector,
            calculator,
            ledger,
            classifier,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn ledger(&self) -> &ReputationLedger {
        &self.ledger
    }

    /// Language detection as used by `evaluate` when no hint is given.
    pub fn detect_language(&self, text: &str) -> Language {
        self.detector.detect(text.trim())
    }

    /// Read-only reputation lookup; unseen sources report the default and
    /// are not created.
    pub fn get_reputation(&self, source_id: &str) -> Result<f64, VeritasError> {
        self.ledger.get_reputation(source_id)
    }

    /// Current state of a source, derived from its reputation.
    pub fn source_state(&self, source_id: &str) -> Result<SourceState, VeritasError> {
        self.ledger.state_of(source_id)
    }

    /// Evaluate `text` attributed to `source_id`.
    ///
    /// Input problems are reported inside the result (`error`, `warnings`).
    /// `Err` is returned only when the reputation store fails.
    pub fn evaluate(
        &self,
        text: &str,
        source_id: &str,
        language_hint: Option<&str>,
    ) -> Result<EvaluationResult, VeritasError> {
        let trimmed = text.trim();
        let mut warnings = Vec::new();
        let language = self.resolve_language(trimmed, language_hint, &mut warnings);

        let report = match self.calculator.score(trimmed, language) {
            Ok(report) => report,
            Err(too_short) => {
                return self.rejected(trimmed, source_id, language, too_short, warnings)
            }
        };

        let update = self.ledger.apply(source_id, report.entropy_index)?;
        let chaos = report.is_chaos();
        let classification = self.classifier.classify(
            report.entropy_index,
            update.reputation_after,
            chaos,
            language,
        );

        info!(
            source_id = %source_id,
            language = %language,
            entropy_index = report.entropy_index,
            status = %classification.status,
            reputation_after = update.reputation_after,
            intervention = classification.intervention_required,
            "Text evaluated"
        );

        Ok(EvaluationResult {
            evaluation_id: Uuid::now_v7(),
            evaluated_at: Utc::now(),
            source_id: source_id.to_string(),
            language,
            text_digest: text_digest(trimmed),
            entropy_index: report.entropy_index,
            reputation_before: update.reputation_before,
            reputation_after: update.reputation_after,
            slashing: update.outcome,
            status: classification.status,
            verdict: classification.verdict,
            source_state: classification.source_state,
            source_action: classification.source_action,
            intervention_required: classification.intervention_required,
            chaos_detected: chaos,
            recommendation: verdicts::recommendation(
                classification.status,
                report.entropy_index,
                language,
            ),
            diagnostics: report.diagnostics,
            error: None,
            warnings,
        })
    }

    fn resolve_language(
        &self,
        text: &str,
        hint: Option<&str>,
        warnings: &mut Vec<EvaluationIssue>,
    ) -> Language {
        match hint {
            None => self.detector.detect(text),
            Some(hint) => match hint.parse::<Language>() {
                Ok(language) => language,
                Err(_) => {
                    let fallback = self.config.default_language;
                    warn!(hint = %hint, fallback = %fallback, "Unsupported language hint");
                    warnings.push(EvaluationIssue::UnsupportedLanguage {
                        hint: hint.to_string(),
                    });
                    fallback
                }
            },
        }
    }

    fn rejected(
        &self,
        trimmed: &str,
        source_id: &str,
        language: Language,
        too_short: TextTooShort,
        warnings: Vec<EvaluationIssue>,
    ) -> Result<EvaluationResult, VeritasError> {
        let issue = EvaluationIssue::from(too_short);
        warn!(source_id = %source_id, issue = %issue, "Text rejected before scoring");

        let reputation = self.ledger.get_reputation(source_id)?;
        let classification = self.classifier.unscored(reputation, language);

        Ok(EvaluationResult {
            evaluation_id: Uuid::now_v7(),
            evaluated_at: Utc::now(),
            source_id: source_id.to_string(),
            language,
            text_digest: text_digest(trimmed),
            entropy_index: 0.0,
            reputation_before: reputation,
            reputation_after: reputation,
            slashing: SlashOutcome::Skipped,
            status: classification.status,
            verdict: classification.verdict,
            source_state: classification.source_state,
            source_action: classification.source_action,
            intervention_required: classification.intervention_required,
            chaos_detected: false,
            diagnostics: Diagnostics {
                char_count: too_short.chars,
                ..Diagnostics::default()
            },
            recommendation: None,
            error: Some(issue),
            warnings,
        })
    }
}
