// crates/veritas-reputation/src/snapshot.rs
//
// Point-in-time export of the reputation registry as JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use veritas_core::{clamp_reputation, ReputationStore, SourceRecord, VeritasError};

/// Serializable copy of every source record at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReputationSnapshot {
    pub taken_at: DateTime<Utc>,
    pub sources: Vec<SourceRecord>,
}

impl ReputationSnapshot {
    /// Copy every record out of `store`.
    pub fn capture(store: &dyn ReputationStore) -> Result<Self, VeritasError> {
        Ok(Self {
            taken_at: Utc::now(),
            sources: store.list()?,
        })
    }

    /// Write every record back into `store`, overwriting existing entries.
    ///
    /// Reputations are clamped on the way in. Returns the number of records
    /// restored.
    pub fn restore(&self, store: &dyn ReputationStore) -> Result<usize, VeritasError> {
        for record in &self.sources {
            if record.id.is_empty() {
                return Err(VeritasError::InvalidInput(
                    "snapshot contains a record with an empty source id".to_string(),
                ));
            }
            let mut record = record.clone();
            record.reputation = clamp_reputation(record.reputation);
            store.put(record)?;
        }
        Ok(self.sources.len())
    }

    pub fn to_json(&self) -> Result<String, VeritasError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, VeritasError> {
        Ok(serde_json::from_str(json)?)
    }
}
