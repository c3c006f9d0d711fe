// crates/veritas-core/src/traits.rs

use crate::error::VeritasError;
use crate::record::SourceRecord;

/// Trait for the source reputation registry.
///
/// Implemented by veritas-reputation (in-memory backend). A durable backend
/// keyed by source id can be substituted without touching the engine.
///
/// `update` is the only read-modify-write path and must be atomic per source:
/// two concurrent updates of the same source may not lose either write.
pub trait ReputationStore: Send + Sync {
    /// Retrieve the record for a source, or `None` if it was never seen.
    fn get(&self, source_id: &str) -> Result<Option<SourceRecord>, VeritasError>;

    /// Insert or overwrite a record.
    fn put(&self, record: SourceRecord) -> Result<(), VeritasError>;

    /// Atomically apply `mutate` to the record for `source_id`, creating it
    /// with `default_reputation` first if it does not exist.
    ///
    /// Returns `(record_before, record_after)`.
    fn update(
        &self,
        source_id: &str,
        default_reputation: f64,
        mutate: &mut dyn FnMut(&mut SourceRecord),
    ) -> Result<(SourceRecord, SourceRecord), VeritasError>;

    /// List every record, ordered by source id.
    fn list(&self) -> Result<Vec<SourceRecord>, VeritasError>;
}
