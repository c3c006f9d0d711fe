// crates/veritas-cli/src/commands/state.rs
//
// `veritas state <REPUTATION>`: map a reputation value to its source state.

use clap::Args;
use serde::Serialize;

use veritas_core::{Language, OperationalAction, ReputationBands, SourceState};
use veritas_reputation::{classify_reputation, describe};

use crate::error::CliError;
use crate::output::{format_json, OutputFormat};

#[derive(Debug, Args)]
pub struct StateCmd {
    /// Reputation value in [0, 1].
    pub reputation: f64,

    /// Language of the description ("uk" or "en").
    #[arg(long, default_value = "en")]
    pub lang: String,

    #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Report)]
    pub output: OutputFormat,
}

#[derive(Serialize)]
struct StateView {
    reputation: f64,
    state: SourceState,
    action: OperationalAction,
    description: &'static str,
}

pub fn run(cmd: &StateCmd, bands: &ReputationBands) -> Result<(), CliError> {
    if !(0.0..=1.0).contains(&cmd.reputation) {
        return Err(CliError::InvalidArgument(format!(
            "reputation must lie in [0, 1] (got {})",
            cmd.reputation
        )));
    }
    let language: Language = cmd.lang.parse()?;
    let state = classify_reputation(cmd.reputation, bands);
    let view = StateView {
        reputation: cmd.reputation,
        state,
        action: state.action(),
        description: describe(state, language),
    };

    match cmd.output {
        OutputFormat::Json => println!("{}", format_json(&view)),
        OutputFormat::Table | OutputFormat::Report => {
            println!("Reputation: {:.2}", view.reputation);
            println!("State:      {}", view.state);
            println!("Action:     {}", view.action);
            println!("  {}", view.description);
        }
    }
    Ok(())
}
