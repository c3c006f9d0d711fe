// crates/veritas-reputation/src/store.rs
//
// In-memory reputation registry implementing the `ReputationStore` trait.
//
// Records live in a BTreeMap behind a single RwLock. `update` holds the write
// lock across the whole read-modify-write, which serializes concurrent
// updates of any source and rules out lost updates. Nothing is ever evicted.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use veritas_core::{ReputationStore, SourceRecord, VeritasError};

/// In-memory reputation registry.
#[derive(Debug, Default)]
pub struct InMemoryReputationStore {
    records: RwLock<BTreeMap<String, SourceRecord>>,
}

impl InMemoryReputationStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with records.
    pub fn with_records(records: impl IntoIterator<Item = SourceRecord>) -> Self {
        let map = records.into_iter().map(|r| (r.id.clone(), r)).collect();
        Self {
            records: RwLock::new(map),
        }
    }

    /// Number of known sources.
    pub fn len(&self) -> Result<usize, VeritasError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, VeritasError> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<String, SourceRecord>>, VeritasError> {
        self.records
            .read()
            .map_err(|_| VeritasError::Storage("reputation registry lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<String, SourceRecord>>, VeritasError> {
        self.records
            .write()
            .map_err(|_| VeritasError::Storage("reputation registry lock poisoned".to_string()))
    }
}

impl ReputationStore for InMemoryReputationStore {
    fn get(&self, source_id: &str) -> Result<Option<SourceRecord>, VeritasError> {
        Ok(self.read()?.get(source_id).cloned())
    }

    fn put(&self, record: SourceRecord) -> Result<(), VeritasError> {
        self.write()?.insert(record.id.clone(), record);
        Ok(())
    }

    fn update(
        &self,
        source_id: &str,
        default_reputation: f64,
        mutate: &mut dyn FnMut(&mut SourceRecord),
    ) -> Result<(SourceRecord, SourceRecord), VeritasError> {
        let mut records = self.write()?;
        let record = records
            .entry(source_id.to_string())
            .or_insert_with(|| SourceRecord::new(source_id, default_reputation));
        let before = record.clone();
        mutate(record);
        Ok((before, record.clone()))
    }

    fn list(&self) -> Result<Vec<SourceRecord>, VeritasError> {
        Ok(self.read()?.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_unknown_is_none() {
        let store = InMemoryReputationStore::new();
        assert!(store.get("nobody").unwrap().is_none());
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn update_creates_with_default() {
        let store = InMemoryReputationStore::new();
        let (before, after) = store
            .update("feed", 0.5, &mut |r: &mut SourceRecord| {
                r.set_reputation(r.reputation - 0.1)
            })
            .unwrap();
        assert_eq!(before.reputation, 0.5);
        assert!((after.reputation - 0.4).abs() < 1e-12);
        assert_eq!(store.get("feed").unwrap().unwrap(), after);
    }

    #[test]
    fn put_overwrites() {
        let store = InMemoryReputationStore::new();
        store.put(SourceRecord::new("a", 0.9)).unwrap();
        store.put(SourceRecord::new("a", 0.3)).unwrap();
        assert_eq!(store.get("a").unwrap().unwrap().reputation, 0.3);
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn list_is_ordered_by_id() {
        let store = InMemoryReputationStore::with_records(vec![
            SourceRecord::new("zeta", 0.1),
            SourceRecord::new("alpha", 0.2),
        ]);
        let ids: Vec<String> = store.list().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["alpha", "zeta"]);
    }

    #[test]
    fn concurrent_updates_are_not_lost() {
        use std::sync::Arc;

        let store = Arc::new(InMemoryReputationStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        let mut bump = |r: &mut SourceRecord| r.set_reputation(r.reputation + 0.001);
                        store.update("shared", 0.0, &mut bump).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        let record = store.get("shared").unwrap().unwrap();
        assert_eq!(record.evaluations, 400);
        assert!((record.reputation - 0.4).abs() < 1e-9);
    }
}
