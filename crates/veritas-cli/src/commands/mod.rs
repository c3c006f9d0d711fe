// crates/veritas-cli/src/commands/mod.rs
//
// Command module declarations and the shared evaluator context.

pub mod analyze;
pub mod config;
pub mod reputation;
pub mod state;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use veritas_core::EngineConfig;
use veritas_engine::IntegrityEvaluator;
use veritas_reputation::{InMemoryReputationStore, ReputationSnapshot};

use crate::error::CliError;

/// Evaluator plus the registry file it was loaded from, if any.
pub struct Context {
    pub evaluator: IntegrityEvaluator,
    registry_path: Option<String>,
}

impl Context {
    /// Build the evaluator, restoring reputations from `registry_path` when
    /// the file exists. Configuration seeds fill in sources the file lacks.
    pub fn open(engine: EngineConfig, registry_path: Option<String>) -> Result<Self, CliError> {
        let store = Arc::new(InMemoryReputationStore::new());

        if let Some(path) = registry_path.as_deref() {
            if Path::new(path).exists() {
                let snapshot = ReputationSnapshot::from_json(&fs::read_to_string(path)?)?;
                let restored = snapshot.restore(store.as_ref())?;
                debug!(path, restored, "Loaded reputation registry");
            } else {
                debug!(path, "Registry file not found; starting empty");
            }
        }

        let evaluator = IntegrityEvaluator::with_store(engine, store)?;
        Ok(Self {
            evaluator,
            registry_path,
        })
    }

    /// Write the registry back to its file. No-op without a registry path.
    pub fn persist(&self) -> Result<(), CliError> {
        let Some(path) = self.registry_path.as_deref() else {
            return Ok(());
        };
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let snapshot = self.evaluator.ledger().snapshot()?;
        fs::write(path, snapshot.to_json()?)?;
        info!(path, sources = snapshot.sources.len(), "Saved reputation registry");
        Ok(())
    }
}
