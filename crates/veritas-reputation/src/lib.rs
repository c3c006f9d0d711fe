// crates/veritas-reputation/src/lib.rs
//
// veritas-reputation: Source reputation for the Veritas integrity engine.
//
// Holds the in-memory reputation registry, the slashing/reward policy that
// turns entropy into reputation changes, the reputation-to-state mapping,
// and JSON snapshots of the registry.

pub mod ledger;
pub mod slashing;
pub mod snapshot;
pub mod states;
pub mod store;

pub use ledger::{LedgerUpdate, ReputationLedger};
pub use slashing::SlashingPolicy;
pub use snapshot::ReputationSnapshot;
pub use states::{classify_reputation, describe};
pub use store::InMemoryReputationStore;
