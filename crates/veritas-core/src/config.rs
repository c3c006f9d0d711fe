// crates/veritas-core/src/config.rs
//
// Engine configuration: entropy bands, slashing policy, composite weights and
// reputation bands, with documented defaults and an ordering check.
//
// Every field carries a serde default so a partial TOML/JSON document (or no
// document at all) yields a complete configuration. Construction of any engine
// component runs `validate()`; nothing is re-checked at evaluation time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::VeritasError;
use crate::language::Language;
use crate::record::DEFAULT_REPUTATION;

/// Ascending entropy cutoffs separating the five status bands.
///
/// entropy < trusted            -> TRUSTED
/// entropy < acceptable         -> ACCEPTABLE
/// entropy < suspicious         -> SUSPICIOUS
/// entropy < critical           -> WARNING
/// otherwise                    -> CRITICAL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntropyThresholds {
    pub trusted: f64,
    pub acceptable: f64,
    pub suspicious: f64,
    pub critical: f64,
}

impl Default for EntropyThresholds {
    fn default() -> Self {
        Self {
            trusted: 0.35,
            acceptable: 0.55,
            suspicious: 0.75,
            critical: 0.85,
        }
    }
}

/// Reputation slashing/reward policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlashingConfig {
    /// Entropy above which the source is penalized. Default: 0.40.
    pub warning_threshold: f64,
    /// Penalty = entropy_index * penalty_multiplier. Default: 0.40.
    pub penalty_multiplier: f64,
    /// Fixed bonus for entropy below the trusted threshold. Default: 0.05.
    pub reward_bonus: f64,
    /// Reputation of a source on first reference. Default: 0.50.
    pub default_reputation: f64,
    /// Reputation below which intervention is required. Default: 0.30.
    pub intervention_floor: f64,
}

impl Default for SlashingConfig {
    fn default() -> Self {
        Self {
            warning_threshold: 0.40,
            penalty_multiplier: 0.40,
            reward_bonus: 0.05,
            default_reputation: DEFAULT_REPUTATION,
            intervention_floor: 0.30,
        }
    }
}

/// Weights of the composite entropy formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeWeights {
    /// Weight of normalized character entropy in the base score.
    pub character: f64,
    /// Weight of lexical complexity in the base score.
    pub complexity: f64,
    /// Share of the marker ratio when blending with the base score.
    pub marker_mix: f64,
    /// Factual discount per unit of numeric density.
    pub numeric_discount: f64,
    /// Weight of the shout factor.
    pub shout: f64,
    /// Weight of the sanity penalty.
    pub sanity: f64,
    /// Penalty raised when an incompatible concept cluster is detected.
    pub sanity_penalty: f64,
    /// Multiplier applied to academic/technical profiles.
    pub calibration_multiplier: f64,
    pub calibration_min_numeric_density: f64,
    pub calibration_max_shout: f64,
    /// Signal markers must exceed noise markers times this ratio.
    pub calibration_signal_ratio: f64,
    /// Word count above which long-text damping may apply.
    pub long_text_words: usize,
    /// Complexity above which long-text damping applies.
    pub long_text_complexity: f64,
    pub long_text_damping: f64,
}

impl Default for CompositeWeights {
    fn default() -> Self {
        Self {
            character: 0.6,
            complexity: 0.4,
            marker_mix: 0.3,
            numeric_discount: 0.25,
            shout: 0.35,
            sanity: 0.3,
            sanity_penalty: 0.9,
            calibration_multiplier: 0.75,
            calibration_min_numeric_density: 0.05,
            calibration_max_shout: 0.1,
            calibration_signal_ratio: 2.0,
            long_text_words: 500,
            long_text_complexity: 0.6,
            long_text_damping: 0.7,
        }
    }
}

/// Descending reputation cutoffs for source states.
///
/// reputation >= stable_trust -> STABLE_TRUST
/// reputation >= monitored    -> MONITORED
/// reputation >= warning      -> WARNING
/// reputation >= critical     -> CRITICAL
/// otherwise                  -> QUARANTINE
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReputationBands {
    pub stable_trust: f64,
    pub monitored: f64,
    pub warning: f64,
    pub critical: f64,
}

impl Default for ReputationBands {
    fn default() -> Self {
        Self {
            stable_trust: 0.85,
            monitored: 0.60,
            warning: 0.40,
            critical: 0.20,
        }
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Minimum trimmed text length, in characters. Default: 10.
    pub min_text_chars: usize,
    /// Language used on detection ties and unsupported hints. Default: en.
    pub default_language: Language,
    pub thresholds: EntropyThresholds,
    pub slashing: SlashingConfig,
    pub weights: CompositeWeights,
    pub reputation_bands: ReputationBands,
    /// Sources pre-registered with a starting reputation.
    pub seed_sources: BTreeMap<String, f64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_text_chars: 10,
            default_language: Language::En,
            thresholds: EntropyThresholds::default(),
            slashing: SlashingConfig::default(),
            weights: CompositeWeights::default(),
            reputation_bands: ReputationBands::default(),
            seed_sources: BTreeMap::new(),
        }
    }
}

/// Keys accepted by `EngineConfig::with_overrides`.
pub const OVERRIDE_KEYS: [&str; 10] = [
    "trusted",
    "acceptable",
    "suspicious",
    "critical",
    "warning",
    "penalty_multiplier",
    "reward_bonus",
    "default_reputation",
    "intervention_floor",
    "min_text_chars",
];

impl EngineConfig {
    /// Check every ordering and range invariant.
    ///
    /// Returns `VeritasError::Configuration` naming the first violation.
    pub fn validate(&self) -> Result<(), VeritasError> {
        if self.min_text_chars == 0 {
            return Err(config_err("min_text_chars must be at least 1"));
        }

        let t = &self.thresholds;
        if !(0.0 < t.trusted && t.trusted < t.acceptable && t.acceptable < t.suspicious
            && t.suspicious < t.critical && t.critical < 1.0)
        {
            return Err(config_err(format!(
                "entropy thresholds must satisfy 0 < trusted < acceptable < suspicious < critical < 1 \
                 (got trusted={}, acceptable={}, suspicious={}, critical={})",
                t.trusted, t.acceptable, t.suspicious, t.critical
            )));
        }

        let s = &self.slashing;
        if !(t.trusted <= s.warning_threshold && s.warning_threshold < 1.0) {
            return Err(config_err(format!(
                "warning_threshold must lie in [trusted, 1) (got {}, trusted={})",
                s.warning_threshold, t.trusted
            )));
        }
        check_non_negative("penalty_multiplier", s.penalty_multiplier)?;
        check_non_negative("reward_bonus", s.reward_bonus)?;
        check_unit("default_reputation", s.default_reputation)?;
        check_unit("intervention_floor", s.intervention_floor)?;

        let w = &self.weights;
        for (name, value) in [
            ("weights.character", w.character),
            ("weights.complexity", w.complexity),
            ("weights.numeric_discount", w.numeric_discount),
            ("weights.shout", w.shout),
            ("weights.sanity", w.sanity),
            ("weights.sanity_penalty", w.sanity_penalty),
            ("weights.calibration_min_numeric_density", w.calibration_min_numeric_density),
            ("weights.calibration_max_shout", w.calibration_max_shout),
            ("weights.calibration_signal_ratio", w.calibration_signal_ratio),
            ("weights.long_text_complexity", w.long_text_complexity),
        ] {
            check_non_negative(name, value)?;
        }
        check_unit("weights.marker_mix", w.marker_mix)?;
        for (name, value) in [
            ("weights.calibration_multiplier", w.calibration_multiplier),
            ("weights.long_text_damping", w.long_text_damping),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(config_err(format!("{} must lie in (0, 1] (got {})", name, value)));
            }
        }

        let b = &self.reputation_bands;
        if !(0.0 < b.critical && b.critical < b.warning && b.warning < b.monitored
            && b.monitored < b.stable_trust && b.stable_trust < 1.0)
        {
            return Err(config_err(format!(
                "reputation bands must satisfy 0 < critical < warning < monitored < stable_trust < 1 \
                 (got critical={}, warning={}, monitored={}, stable_trust={})",
                b.critical, b.warning, b.monitored, b.stable_trust
            )));
        }

        for (id, reputation) in &self.seed_sources {
            check_unit(&format!("seed_sources.{}", id), *reputation)?;
        }

        Ok(())
    }

    /// Apply flat key -> value overrides on top of this configuration and
    /// validate the result.
    ///
    /// Unknown keys are rejected rather than ignored. See `OVERRIDE_KEYS`.
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, f64>) -> Result<Self, VeritasError> {
        for (key, &value) in overrides {
            match key.as_str() {
                "trusted" => self.thresholds.trusted = value,
                "acceptable" => self.thresholds.acceptable = value,
                "suspicious" => self.thresholds.suspicious = value,
                "critical" => self.thresholds.critical = value,
                "warning" => self.slashing.warning_threshold = value,
                "penalty_multiplier" => self.slashing.penalty_multiplier = value,
                "reward_bonus" => self.slashing.reward_bonus = value,
                "default_reputation" => self.slashing.default_reputation = value,
                "intervention_floor" => self.slashing.intervention_floor = value,
                "min_text_chars" => {
                    if value < 1.0 || value.fract() != 0.0 {
                        return Err(config_err(format!(
                            "min_text_chars must be a positive integer (got {})",
                            value
                        )));
                    }
                    self.min_text_chars = value as usize;
                }
                other => {
                    return Err(config_err(format!(
                        "unknown configuration key {:?} (expected one of: {})",
                        other,
                        OVERRIDE_KEYS.join(", ")
                    )))
                }
            }
        }
        self.validate()?;
        Ok(self)
    }
}

fn config_err(msg: impl Into<String>) -> VeritasError {
    VeritasError::Configuration(msg.into())
}

fn check_non_negative(name: &str, value: f64) -> Result<(), VeritasError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(config_err(format!("{} must be a non-negative number (got {})", name, value)))
    }
}

fn check_unit(name: &str, value: f64) -> Result<(), VeritasError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(config_err(format!("{} must lie in [0, 1] (got {})", name, value)))
    }
}
