// crates/veritas-reputation/src/slashing.rs
//
// Slashing/reward policy for source reputation.
//
// Two branches adjust reputation after an evaluation:
//   1. Slashing: entropy above the warning threshold subtracts
//      entropy_index * penalty_multiplier.
//   2. Reward: entropy below the trusted threshold adds a fixed bonus.
// Entropy between the two leaves reputation unchanged. The result is always
// clamped to [0, 1]. The policy is deterministic: no randomness, no clock.

use serde::{Deserialize, Serialize};

use veritas_core::{clamp_reputation, EngineConfig, SlashOutcome};

/// Thresholds and amounts of the slashing/reward policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlashingPolicy {
    /// Entropy below which the reward branch fires.
    pub trusted_threshold: f64,
    /// Entropy above which the slashing branch fires.
    pub warning_threshold: f64,
    pub penalty_multiplier: f64,
    pub reward_bonus: f64,
}

impl SlashingPolicy {
    /// Extract the policy from an engine configuration.
    ///
    /// The configuration is expected to have been validated already, which
    /// guarantees `trusted_threshold <= warning_threshold`.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            trusted_threshold: config.thresholds.trusted,
            warning_threshold: config.slashing.warning_threshold,
            penalty_multiplier: config.slashing.penalty_multiplier,
            reward_bonus: config.slashing.reward_bonus,
        }
    }

    /// Which branch fires for `entropy_index`, and by how much.
    pub fn outcome(&self, entropy_index: f64) -> SlashOutcome {
        if entropy_index > self.warning_threshold {
            SlashOutcome::Penalized {
                amount: entropy_index * self.penalty_multiplier,
            }
        } else if entropy_index < self.trusted_threshold {
            SlashOutcome::Rewarded {
                amount: self.reward_bonus,
            }
        } else {
            SlashOutcome::Unchanged
        }
    }

    /// Apply the policy to `current`, returning the clamped new reputation and
    /// the branch that fired.
    pub fn apply(&self, current: f64, entropy_index: f64) -> (f64, SlashOutcome) {
        let outcome = self.outcome(entropy_index);
        let next = match outcome {
            SlashOutcome::Penalized { amount } => current - amount,
            SlashOutcome::Rewarded { amount } => current + amount,
            SlashOutcome::Unchanged | SlashOutcome::Skipped => current,
        };
        (clamp_reputation(next), outcome)
    }
}

impl Default for SlashingPolicy {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}
