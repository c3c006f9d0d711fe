// crates/veritas-cli/src/main.rs
//
// CLI entrypoint for the Veritas integrity engine.
//
// Loads the TOML configuration, applies `--set` overrides, initializes
// tracing on stderr, and dispatches to the analyze/reputation/state/config
// subcommands.

mod commands;
mod config;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing::{info, warn};

use commands::analyze::AnalyzeCmd;
use commands::config::ConfigCmd;
use commands::reputation::ReputationCmd;
use commands::state::StateCmd;
use commands::Context;
use config::{collect_overrides, expand_tilde, parse_override, CliConfig};

/// Veritas: informational entropy scoring and source reputation.
#[derive(Parser, Debug)]
#[command(
    name = "veritas",
    version,
    about = "Score texts for rhetorical entropy and track source reputation"
)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = "~/.veritas/config.toml")]
    config: String,

    /// Reputation registry file (JSON). Overrides `registry_path` from the
    /// configuration file.
    #[arg(long, global = true)]
    registry: Option<String>,

    /// Override a numeric setting, e.g. `--set trusted=0.3`. Repeatable.
    #[arg(long = "set", global = true, value_name = "KEY=VALUE", value_parser = parse_override)]
    overrides: Vec<(String, f64)>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Score a text and update its source's reputation.
    Analyze(AnalyzeCmd),

    /// Show the reputation of one source or of every known source.
    Reputation(ReputationCmd),

    /// Map a reputation value to its source state and action.
    State(StateCmd),

    /// Print the effective engine configuration.
    Config(ConfigCmd),
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = expand_tilde(&cli.config);
    let loaded = CliConfig::load(&config_path);
    let log_level = loaded
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
        )
        .init();

    let cli_config = match loaded {
        Ok(cfg) => {
            info!("Loaded configuration from {}", config_path);
            cfg
        }
        Err(e) => {
            warn!(
                "Could not load config from {}: {}. Using defaults.",
                config_path, e
            );
            CliConfig::default()
        }
    };

    let engine = cli_config
        .engine
        .clone()
        .with_overrides(&collect_overrides(&cli.overrides))?;
    let registry_path = cli
        .registry
        .clone()
        .or_else(|| cli_config.registry_path.clone())
        .map(|p| expand_tilde(&p));

    match &cli.command {
        Commands::Analyze(cmd) => {
            let ctx = Context::open(engine, registry_path)?;
            commands::analyze::run(cmd, &ctx)?
        }
        Commands::Reputation(cmd) => {
            let ctx = Context::open(engine, registry_path)?;
            commands::reputation::run(cmd, &ctx)?
        }
        Commands::State(cmd) => commands::state::run(cmd, &engine.reputation_bands)?,
        Commands::Config(cmd) => commands::config::run(cmd, &engine)?,
    }

    Ok(())
}
