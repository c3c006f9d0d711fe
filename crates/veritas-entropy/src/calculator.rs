// crates/veritas-entropy/src/calculator.rs
//
// Composite entropy scoring.
//
// Pipeline (each step feeds the next):
//   1. Chaos short-circuit: any chaos marker -> 0.99, nothing else computed.
//   2. Character entropy (Shannon, normalized by 8 bits).
//   3. Lexical complexity (1 - vocabulary diversity, long-text damping).
//   4. Marker ratio noise / (signal + noise + 1).
//   5. Numeric density (factual discount).
//   6. Shout factor (emphasis surcharge).
//   7. Sanity check over incompatible concept clusters.
//   8. Composite, clamped to [0, 0.999].
//   9. Academic/technical calibration discount.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use veritas_core::{
    CompositeWeights, Diagnostics, EngineConfig, EvaluationIssue, Language, VeritasError,
};

use crate::lexicon::Lexicon;
use crate::signals;
use crate::tokens::TokenizedText;

/// Entropy assigned when a chaos marker is present.
pub const CHAOS_ENTROPY: f64 = 0.99;

/// Upper bound of the entropy index. 1.0 itself is never produced.
pub const MAX_ENTROPY_INDEX: f64 = 0.999;

/// Composite score plus every intermediate quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntropyReport {
    /// Composite entropy in [0, 0.999].
    pub entropy_index: f64,
    pub diagnostics: Diagnostics,
}

impl EntropyReport {
    /// Whether the chaos short-circuit produced this report.
    pub fn is_chaos(&self) -> bool {
        self.diagnostics.chaos_short_circuit
    }
}

/// The trimmed text is shorter than the configured minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextTooShort {
    /// Characters in the trimmed text.
    pub chars: usize,
    pub minimum: usize,
}

impl From<TextTooShort> for EvaluationIssue {
    fn from(e: TextTooShort) -> Self {
        EvaluationIssue::EmptyInput {
            chars: e.chars,
            minimum: e.minimum,
        }
    }
}

/// Scores text against a language's marker vocabulary.
#[derive(Debug, Clone)]
pub struct EntropyCalculator {
    lexicon: Arc<Lexicon>,
    weights: CompositeWeights,
    min_text_chars: usize,
}

impl EntropyCalculator {
    /// Create a calculator from a validated configuration.
    pub fn new(lexicon: Arc<Lexicon>, config: &EngineConfig) -> Result<Self, VeritasError> {
        config.validate()?;
        Ok(Self {
            lexicon,
            weights: config.weights.clone(),
            min_text_chars: config.min_text_chars,
        })
    }

    /// Score `text` using the vocabulary of `language`.
    ///
    /// Rejects text whose trimmed length is below the configured minimum.
    pub fn score(&self, text: &str, language: Language) -> Result<EntropyReport, TextTooShort> {
        let tokens = TokenizedText::new(text);
        let char_count = tokens.char_count();
        if char_count < self.min_text_chars {
            return Err(TextTooShort {
                chars: char_count,
                minimum: self.min_text_chars,
            });
        }
        Ok(self.score_tokens(&tokens, language))
    }

    fn score_tokens(&self, tokens: &TokenizedText<'_>, language: Language) -> EntropyReport {
        let w = &self.weights;
        let char_count = tokens.char_count();
        let word_count = tokens.word_count();

        // 1. Chaos dominates everything else.
        let chaos_markers = self.lexicon.chaos_markers().count(tokens);
        if chaos_markers > 0 {
            debug!(chaos_markers, word_count, "chaos short-circuit");
            return EntropyReport {
                entropy_index: CHAOS_ENTROPY,
                diagnostics: Diagnostics {
                    char_count,
                    word_count,
                    chaos_markers,
                    chaos_short_circuit: true,
                    ..Diagnostics::default()
                },
            };
        }

        // 2-7. Component measurements.
        let character_entropy = signals::character_entropy(tokens);
        let complexity = signals::lexical_complexity(&tokens.words, w);
        let (noise_markers, signal_markers) = match self.lexicon.vocabulary(language) {
            Some(vocab) => (vocab.noise.count(tokens), vocab.signal.count(tokens)),
            None => (0, 0),
        };
        let ratio = signals::marker_ratio(noise_markers, signal_markers);
        let numeric_density = signals::numeric_density(tokens);
        let shout_factor = signals::shout_factor(tokens);
        let sanity_penalty =
            signals::sanity_penalty(&tokens.words, self.lexicon.clusters(), w.sanity_penalty);

        // 8. Composite.
        let mut score = character_entropy * w.character + complexity * w.complexity;
        if let Some(ratio) = ratio {
            score = score * (1.0 - w.marker_mix) + ratio * w.marker_mix;
        }
        score *= 1.0 - numeric_density * w.numeric_discount;
        score += shout_factor * w.shout;
        score += sanity_penalty * w.sanity;
        let mut entropy_index = clamp_entropy(score);

        // 9. Academic/technical profile.
        let calibrated = signal_markers as f64 > noise_markers as f64 * w.calibration_signal_ratio
            && numeric_density > w.calibration_min_numeric_density
            && shout_factor < w.calibration_max_shout;
        if calibrated {
            entropy_index = clamp_entropy(entropy_index * w.calibration_multiplier);
        }

        let diagnostics = Diagnostics {
            char_count,
            word_count,
            character_entropy,
            complexity,
            noise_markers,
            signal_markers,
            chaos_markers: 0,
            marker_ratio: ratio.unwrap_or(0.0),
            numeric_density,
            shout_factor,
            sanity_penalty,
            calibrated,
            chaos_short_circuit: false,
        };
        debug!(
            %language,
            entropy_index,
            character_entropy,
            complexity,
            noise_markers,
            signal_markers,
            numeric_density,
            shout_factor,
            sanity_penalty,
            calibrated,
            "entropy scored"
        );

        EntropyReport {
            entropy_index,
            diagnostics,
        }
    }
}

/// Clamp to [0, MAX_ENTROPY_INDEX]. NaN maps to 0.
pub fn clamp_entropy(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, MAX_ENTROPY_INDEX)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn calculator() -> EntropyCalculator {
        EntropyCalculator::new(Arc::new(Lexicon::builtin()), &EngineConfig::default()).unwrap()
    }

    #[test]
    fn signal_heavy_ukrainian_is_low() {
        let report = calculator()
            .score("Якщо чипи заблоковано, тоді результат дорівнює нулю.", Language::Uk)
            .unwrap();
        let d = &report.diagnostics;
        assert_eq!(d.word_count, 7);
        assert_eq!(d.signal_markers, 4);
        assert_eq!(d.noise_markers, 0);
        assert_eq!(d.complexity, 0.0);
        assert_eq!(d.shout_factor, 0.0);
        assert!((report.entropy_index - 0.230579763069548).abs() < EPS);
        assert!(!report.is_chaos());
    }

    #[test]
    fn noise_and_shout_is_high() {
        let report = calculator()
            .score("ІСТОРИЧНО! Необхідно ТЕРМІНОВО! Катастрофа!!!", Language::Uk)
            .unwrap();
        let d = &report.diagnostics;
        assert_eq!(d.noise_markers, 4);
        assert_eq!(d.signal_markers, 0);
        assert!((d.marker_ratio - 0.8).abs() < EPS);
        assert_eq!(d.shout_factor, 1.0);
        assert!((report.entropy_index - 0.792395492248824).abs() < EPS);
    }

    #[test]
    fn chaos_short_circuits() {
        let report = calculator()
            .score("Рептилоїди через масонську змову контролюють світову економіку.", Language::Uk)
            .unwrap();
        assert_eq!(report.entropy_index, CHAOS_ENTROPY);
        assert!(report.is_chaos());
        let d = &report.diagnostics;
        // "рептилоїди" and "контролюють"; "змову" is not the token "змова".
        assert_eq!(d.chaos_markers, 2);
        assert_eq!(d.word_count, 7);
        assert_eq!(d.character_entropy, 0.0);
    }

    #[test]
    fn chaos_ignores_selected_language() {
        // English chaos marker scored with the Ukrainian vocabulary.
        let report = calculator()
            .score("Calm and measured statistical analysis of the illuminati.", Language::Uk)
            .unwrap();
        assert!(report.entropy_index >= CHAOS_ENTROPY);
    }

    #[test]
    fn academic_profile_is_calibrated() {
        let text = "У дослідженні взяли участь 2847 респондентів віком від 18 до 65 років. \
                    Статистичний аналіз показав кореляцію 0.73 між змінними. \
                    Результат дослідження: індекс 12.5, коефіцієнт 0.41, медіана 37.";
        let report = calculator().score(text, Language::Uk).unwrap();
        let d = &report.diagnostics;
        assert!(d.calibrated);
        assert_eq!(d.signal_markers, 8);
        assert!((report.entropy_index - 0.183674033377327).abs() < EPS);
    }

    #[test]
    fn incompatible_concepts_add_penalty() {
        let report = calculator()
            .score("Quantum soup recipes are trending among home cooks this winter season.", Language::En)
            .unwrap();
        assert_eq!(report.diagnostics.sanity_penalty, 0.9);
        assert!((report.entropy_index - 0.570149941891674).abs() < EPS);
    }

    #[test]
    fn too_short_is_rejected() {
        let err = calculator().score("   short   ", Language::En).unwrap_err();
        assert_eq!(err, TextTooShort { chars: 5, minimum: 10 });
        assert_eq!(
            EvaluationIssue::from(err),
            EvaluationIssue::EmptyInput { chars: 5, minimum: 10 }
        );
    }

    #[test]
    fn length_boundary() {
        let calc = calculator();
        assert!(calc.score("abcdefghij", Language::En).is_ok());
        assert!(calc.score("abcdefghi", Language::En).is_err());
        // Ten Cyrillic letters are ten characters, not twenty bytes.
        assert!(calc.score("абвгдежзий", Language::Uk).is_ok());
    }

    #[test]
    fn more_exclamations_never_lower_entropy() {
        let calc = calculator();
        let base = "The committee reviewed the budget and approved the road repair plan";
        let mut previous = calc.score(base, Language::En).unwrap().entropy_index;
        for n in 1..30 {
            let text = format!("{}{}", base, "!".repeat(n));
            let current = calc.score(&text, Language::En).unwrap().entropy_index;
            assert!(current >= previous, "{} exclamations: {} < {}", n, current, previous);
            previous = current;
        }
    }

    #[test]
    fn more_caps_words_never_lower_entropy() {
        let calc = calculator();
        let words = ["committee", "reviewed", "budget", "approved", "repair", "tonight"];
        let mut previous = calc
            .score(&words.join(" "), Language::En)
            .unwrap()
            .entropy_index;
        for k in 1..=words.len() {
            let text: Vec<String> = words
                .iter()
                .enumerate()
                .map(|(i, w)| if i < k { w.to_uppercase() } else { w.to_string() })
                .collect();
            let current = calc.score(&text.join(" "), Language::En).unwrap().entropy_index;
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn repeated_scoring_is_bit_identical() {
        let calc = calculator();
        let text = "The committee reviewed the budget and approved the road repair plan!!!!!!!";
        let first = calc.score(text, Language::En).unwrap().entropy_index.to_bits();
        for _ in 0..100 {
            assert_eq!(calc.score(text, Language::En).unwrap().entropy_index.to_bits(), first);
        }
    }

    #[test]
    fn entropy_stays_in_range() {
        let calc = calculator();
        let samples = [
            "!!!!!!!!!!!!!!!!!!!!",
            "a a a a a a a a a a a a a a a",
            "URGENT URGENT URGENT SHOCKING PANIC!!! quantum soup magic crypto",
            "1 2 3 4 5 6 7 8 9 10 11 12 13",
            "If data then result equals fact therefore 42 3.14 2.71",
        ];
        for text in samples {
            let e = calc.score(text, Language::En).unwrap().entropy_index;
            assert!((0.0..=MAX_ENTROPY_INDEX).contains(&e), "{:?} -> {}", text, e);
        }
    }

    #[test]
    fn clamp_entropy_bounds() {
        assert_eq!(clamp_entropy(1.5), MAX_ENTROPY_INDEX);
        assert_eq!(clamp_entropy(-0.2), 0.0);
        assert_eq!(clamp_entropy(f64::NAN), 0.0);
    }
}
