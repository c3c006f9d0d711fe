// crates/veritas-cli/src/config.rs
//
// CLI configuration, loaded from a TOML file or populated with defaults.
//
// Example:
//
//   log_level = "debug"
//   registry_path = "~/.veritas/registry.json"
//
//   [engine.thresholds]
//   trusted = 0.30
//
//   [engine.seed_sources]
//   "bbc.com" = 0.9

use std::collections::BTreeMap;
use std::fs;

use serde::{Deserialize, Serialize};

use veritas_core::EngineConfig;

use crate::error::CliError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// JSON reputation snapshot carried between invocations.
    /// When unset, reputations live only for the duration of one command.
    #[serde(default)]
    pub registry_path: Option<String>,

    #[serde(default)]
    pub engine: EngineConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            registry_path: None,
            engine: EngineConfig::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file at the given path.
    pub fn load(path: &str) -> Result<Self, CliError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, CliError> {
        Ok(toml::from_str(contents)?)
    }
}

/// Parse one `--set key=value` argument.
pub fn parse_override(arg: &str) -> Result<(String, f64), String> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got {:?}", arg))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in {:?}", arg));
    }
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("value for {:?} is not a number: {:?}", key, value))?;
    Ok((key.to_string(), value))
}

/// Collect parsed overrides; later occurrences of a key win.
pub fn collect_overrides(pairs: &[(String, f64)]) -> BTreeMap<String, f64> {
    pairs.iter().cloned().collect()
}

/// Expand a leading `~/` to the user's home directory.
pub fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest).display().to_string();
        }
    }
    path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = CliConfig::parse("").unwrap();
        assert_eq!(config.log_level, "info");
        assert!(config.registry_path.is_none());
        assert_eq!(config.engine, EngineConfig::default());
    }

    #[test]
    fn partial_engine_tables_keep_other_defaults() {
        let config = CliConfig::parse(
            r#"
            log_level = "debug"
            registry_path = "/tmp/registry.json"

            [engine]
            default_language = "uk"

            [engine.thresholds]
            trusted = 0.30

            [engine.seed_sources]
            "bbc.com" = 0.9
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.engine.thresholds.trusted, 0.30);
        assert_eq!(config.engine.thresholds.critical, 0.85);
        assert_eq!(config.engine.seed_sources.get("bbc.com"), Some(&0.9));
        assert_eq!(config.engine.default_language, veritas_core::Language::Uk);
        assert!(config.engine.validate().is_ok());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(matches!(
            CliConfig::parse("log_level = "),
            Err(CliError::ConfigFile(_))
        ));
    }

    #[test]
    fn override_parsing() {
        assert_eq!(parse_override("trusted=0.3").unwrap(), ("trusted".to_string(), 0.3));
        assert_eq!(parse_override(" warning = 0.5 ").unwrap().1, 0.5);
        assert!(parse_override("trusted").is_err());
        assert!(parse_override("=0.3").is_err());
        assert!(parse_override("trusted=high").is_err());
    }

    #[test]
    fn last_override_wins() {
        let map = collect_overrides(&[
            ("trusted".to_string(), 0.2),
            ("trusted".to_string(), 0.3),
        ]);
        assert_eq!(map.get("trusted"), Some(&0.3));
    }

    #[test]
    fn tilde_expansion_leaves_plain_paths() {
        assert_eq!(expand_tilde("/etc/veritas.toml"), "/etc/veritas.toml");
    }
}
