// crates/veritas-engine/src/classifier.rs
//
// Status classification over two independent axes.
//
// The entropy axis places the entropy index into one of five ascending
// bands and alone determines `status` and `verdict`. The reputation axis
// maps the post-update reputation to a source state and operational action.
// Chaos forces the most severe status. Intervention is required when any of
// these holds: entropy at or above the critical threshold, reputation below
// the intervention floor, or chaos.

use serde::{Deserialize, Serialize};

use veritas_core::{
    EngineConfig, EntropyStatus, EntropyThresholds, Language, OperationalAction,
    ReputationBands, SourceState,
};
use veritas_reputation::classify_reputation;

use crate::verdicts;

/// Output of `StatusClassifier::classify`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub status: EntropyStatus,
    pub verdict: String,
    pub source_state: SourceState,
    pub source_action: OperationalAction,
    pub intervention_required: bool,
}

#[derive(Debug, Clone)]
pub struct StatusClassifier {
    thresholds: EntropyThresholds,
    bands: ReputationBands,
    intervention_floor: f64,
}

impl StatusClassifier {
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            thresholds: config.thresholds.clone(),
            bands: config.reputation_bands.clone(),
            intervention_floor: config.slashing.intervention_floor,
        }
    }

    /// Entropy band of `entropy_index`. Each threshold is the inclusive lower
    /// bound of the next band.
    pub fn entropy_status(&self, entropy_index: f64) -> EntropyStatus {
        let t = &self.thresholds;
        if entropy_index < t.trusted {
            EntropyStatus::Trusted
        } else if entropy_index < t.acceptable {
            EntropyStatus::Acceptable
        } else if entropy_index < t.suspicious {
            EntropyStatus::Suspicious
        } else if entropy_index < t.critical {
            EntropyStatus::Warning
        } else {
            EntropyStatus::Critical
        }
    }

    pub fn source_state(&self, reputation: f64) -> SourceState {
        classify_reputation(reputation, &self.bands)
    }

    pub fn classify(
        &self,
        entropy_index: f64,
        reputation_after: f64,
        chaos: bool,
        language: Language,
    ) -> Classification {
        let status = if chaos {
            EntropyStatus::Critical
        } else {
            self.entropy_status(entropy_index)
        };
        let source_state = self.source_state(reputation_after);
        let intervention_required = chaos
            || entropy_index >= self.thresholds.critical
            || reputation_after < self.intervention_floor;

        Classification {
            status,
            verdict: verdicts::verdict(status, chaos, language).to_string(),
            source_state,
            source_action: source_state.action(),
            intervention_required,
        }
    }

    /// Classification of a text that was rejected before scoring. The source
    /// axis still reflects the unchanged reputation, so a source already
    /// below the intervention floor still requires intervention.
    pub fn unscored(&self, reputation: f64, language: Language) -> Classification {
        let source_state = self.source_state(reputation);
        Classification {
            status: EntropyStatus::Unscored,
            verdict: verdicts::verdict(EntropyStatus::Unscored, false, language).to_string(),
            source_state,
            source_action: source_state.action(),
            intervention_required: reputation < self.intervention_floor,
        }
    }
}
