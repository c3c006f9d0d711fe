// crates/veritas-cli/src/commands/config.rs
//
// `veritas config`: print the effective engine configuration after file
// loading and `--set` overrides.

use clap::{Args, ValueEnum};

use veritas_core::EngineConfig;

use crate::error::CliError;
use crate::output::format_json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    Toml,
    Json,
}

#[derive(Debug, Args)]
pub struct ConfigCmd {
    #[arg(long, short = 'o', value_enum, default_value_t = ConfigFormat::Toml)]
    pub output: ConfigFormat,
}

pub fn run(cmd: &ConfigCmd, engine: &EngineConfig) -> Result<(), CliError> {
    match cmd.output {
        ConfigFormat::Toml => print!("{}", toml::to_string_pretty(engine)?),
        ConfigFormat::Json => println!("{}", format_json(engine)),
    }
    Ok(())
}
