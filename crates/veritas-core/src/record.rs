// crates/veritas-core/src/record.rs
//
// Source records: the persistent trust value attached to a declared source.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reputation assigned to a source on first reference.
pub const DEFAULT_REPUTATION: f64 = 0.5;

/// Trust state of one source in the reputation registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRecord {
    /// Free-form source identifier (e.g. a domain name or feed handle).
    pub id: String,
    /// Trust value in [0.0, 1.0].
    pub reputation: f64,
    /// Number of evaluations that have been applied to this source.
    #[serde(default)]
    pub evaluations: u64,
    /// When the reputation was last written, if ever.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SourceRecord {
    /// Create a record with the given reputation, clamped to [0.0, 1.0].
    pub fn new(id: impl Into<String>, reputation: f64) -> Self {
        Self {
            id: id.into(),
            reputation: clamp_reputation(reputation),
            evaluations: 0,
            updated_at: None,
        }
    }

    /// Overwrite the reputation (clamped) and stamp the record as updated.
    pub fn set_reputation(&mut self, reputation: f64) {
        self.reputation = clamp_reputation(reputation);
        self.evaluations += 1;
        self.updated_at = Some(Utc::now());
    }
}

/// Clamp a reputation value to [0.0, 1.0]. NaN maps to 0.0.
pub fn clamp_reputation(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}
