// crates/veritas-reputation/src/ledger.rs
//
// The reputation ledger: the single write path for source reputation.
//
// Each `apply` is one atomic read-modify-write on the underlying store. Reads
// through `get_reputation` never create or mutate records.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use veritas_core::{
    EngineConfig, ReputationBands, ReputationStore, SlashOutcome, SourceRecord, SourceState,
    VeritasError,
};

use crate::slashing::SlashingPolicy;
use crate::snapshot::ReputationSnapshot;
use crate::states::classify_reputation;
use crate::store::InMemoryReputationStore;

/// Result of applying one evaluation to a source's reputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerUpdate {
    pub source_id: String,
    pub reputation_before: f64,
    pub reputation_after: f64,
    pub outcome: SlashOutcome,
    /// Evaluations applied to this source so far, including this one.
    pub evaluations: u64,
}

/// Owns the reputation store and the slashing policy applied to it.
pub struct ReputationLedger {
    store: Arc<dyn ReputationStore>,
    policy: SlashingPolicy,
    default_reputation: f64,
    bands: ReputationBands,
}

impl ReputationLedger {
    /// Build a ledger over a fresh in-memory store.
    pub fn in_memory(config: &EngineConfig) -> Result<Self, VeritasError> {
        Self::new(Arc::new(InMemoryReputationStore::new()), config)
    }

    /// Build a ledger over `store`, validating `config` and registering its
    /// seed sources. Seeds never overwrite a source the store already knows.
    pub fn new(store: Arc<dyn ReputationStore>, config: &EngineConfig) -> Result<Self, VeritasError> {
        config.validate()?;

        let ledger = Self {
            store,
            policy: SlashingPolicy::from_config(config),
            default_reputation: config.slashing.default_reputation,
            bands: config.reputation_bands.clone(),
        };

        for (source_id, &reputation) in &config.seed_sources {
            if ledger.store.get(source_id)?.is_none() {
                ledger.store.put(SourceRecord::new(source_id.as_str(), reputation))?;
                debug!(source_id = %source_id, reputation, "Seeded source reputation");
            }
        }

        Ok(ledger)
    }

    pub fn default_reputation(&self) -> f64 {
        self.default_reputation
    }

    /// Current reputation of a source; the default for unseen sources.
    pub fn get_reputation(&self, source_id: &str) -> Result<f64, VeritasError> {
        Ok(self
            .store
            .get(source_id)?
            .map(|r| r.reputation)
            .unwrap_or(self.default_reputation))
    }

    /// Current source state of a source, derived from its reputation.
    pub fn state_of(&self, source_id: &str) -> Result<SourceState, VeritasError> {
        Ok(self.classify(self.get_reputation(source_id)?))
    }

    /// Source state for an arbitrary reputation value.
    pub fn classify(&self, reputation: f64) -> SourceState {
        classify_reputation(reputation, &self.bands)
    }

    /// The stored record for a source, if it has ever been seen.
    pub fn record(&self, source_id: &str) -> Result<Option<SourceRecord>, VeritasError> {
        self.store.get(source_id)
    }

    /// Every known source, ordered by id.
    pub fn sources(&self) -> Result<Vec<SourceRecord>, VeritasError> {
        self.store.list()
    }

    /// Apply the slashing policy for `entropy_index` to `source_id`.
    ///
    /// Unseen sources start at the default reputation. The read, adjustment
    /// and write happen atomically with respect to other updates.
    pub fn apply(&self, source_id: &str, entropy_index: f64) -> Result<LedgerUpdate, VeritasError> {
        let policy = &self.policy;
        let mut outcome = SlashOutcome::Unchanged;
        let mut adjust = |record: &mut SourceRecord| {
            let (next, fired) = policy.apply(record.reputation, entropy_index);
            outcome = fired;
            record.set_reputation(next);
        };
        let (before, after) = self
            .store
            .update(source_id, self.default_reputation, &mut adjust)?;

        match outcome {
            SlashOutcome::Penalized { amount } => info!(
                source_id = %source_id,
                entropy_index,
                penalty = amount,
                before = before.reputation,
                after = after.reputation,
                "Source slashed"
            ),
            SlashOutcome::Rewarded { amount } => info!(
                source_id = %source_id,
                entropy_index,
                reward = amount,
                before = before.reputation,
                after = after.reputation,
                "Source rewarded"
            ),
            SlashOutcome::Unchanged | SlashOutcome::Skipped => debug!(
                source_id = %source_id,
                entropy_index,
                reputation = after.reputation,
                "Source reputation unchanged"
            ),
        }

        Ok(LedgerUpdate {
            source_id: source_id.to_string(),
            reputation_before: before.reputation,
            reputation_after: after.reputation,
            outcome,
            evaluations: after.evaluations,
        })
    }

    /// Export every record as a snapshot.
    pub fn snapshot(&self) -> Result<ReputationSnapshot, VeritasError> {
        ReputationSnapshot::capture(self.store.as_ref())
    }

    /// Load a snapshot into the store, overwriting matching sources.
    pub fn restore(&self, snapshot: &ReputationSnapshot) -> Result<usize, VeritasError> {
        let restored = snapshot.restore(self.store.as_ref())?;
        info!(restored, "Restored reputation snapshot");
        Ok(restored)
    }
}

impl std::fmt::Debug for ReputationLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReputationLedger")
            .field("policy", &self.policy)
            .field("default_reputation", &self.default_reputation)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn ledger() -> ReputationLedger {
        ReputationLedger::in_memory(&EngineConfig::default()).unwrap()
    }

    #[test]
    fn unseen_source_reads_default_without_creating() {
        let ledger = ledger();
        assert_eq!(ledger.get_reputation("ghost").unwrap(), 0.5);
        assert!(ledger.record("ghost").unwrap().is_none());
        assert_eq!(ledger.state_of("ghost").unwrap(), SourceState::Warning);
    }

    #[test]
    fn penalty_then_reward() {
        let ledger = ledger();
        let slashed = ledger.apply("feed", 0.8).unwrap();
        assert_eq!(slashed.reputation_before, 0.5);
        assert!((slashed.reputation_after - 0.18).abs() < EPS);
        assert_eq!(slashed.evaluations, 1);

        let rewarded = ledger.apply("feed", 0.1).unwrap();
        assert!((rewarded.reputation_before - 0.18).abs() < EPS);
        assert!((rewarded.reputation_after - 0.23).abs() < EPS);
        assert_eq!(rewarded.outcome, SlashOutcome::Rewarded { amount: 0.05 });
        assert_eq!(rewarded.evaluations, 2);
    }

    #[test]
    fn repeated_penalties_floor_at_zero() {
        let ledger = ledger();
        for _ in 0..10 {
            ledger.apply("spam", 0.95).unwrap();
        }
        assert_eq!(ledger.get_reputation("spam").unwrap(), 0.0);
        assert_eq!(ledger.state_of("spam").unwrap(), SourceState::Quarantine);
    }

    #[test]
    fn seeds_are_registered_once() {
        let mut config = EngineConfig::default();
        config.seed_sources.insert("wire.example".to_string(), 0.9);
        let store: Arc<dyn ReputationStore> = Arc::new(InMemoryReputationStore::new());
        store.put(SourceRecord::new("wire.example", 0.3)).unwrap();

        let ledger = ReputationLedger::new(store, &config).unwrap();
        assert_eq!(ledger.get_reputation("wire.example").unwrap(), 0.3);

        let fresh = ReputationLedger::in_memory(&config).unwrap();
        assert_eq!(fresh.get_reputation("wire.example").unwrap(), 0.9);
        assert_eq!(fresh.state_of("wire.example").unwrap(), SourceState::StableTrust);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = EngineConfig::default();
        config.thresholds.trusted = 0.9;
        assert!(matches!(
            ReputationLedger::in_memory(&config),
            Err(VeritasError::Configuration(_))
        ));
    }

    #[test]
    fn snapshot_round_trip_through_ledger() {
        let ledger = ledger();
        ledger.apply("a", 0.2).unwrap();
        ledger.apply("b", 0.9).unwrap();
        let snapshot = ledger.snapshot().unwrap();
        assert_eq!(snapshot.sources.len(), 2);

        let other = ReputationLedger::in_memory(&EngineConfig::default()).unwrap();
        assert_eq!(other.restore(&snapshot).unwrap(), 2);
        assert_eq!(
            other.get_reputation("b").unwrap(),
            ledger.get_reputation("b").unwrap()
        );
    }
}
