// crates/veritas-cli/src/commands/reputation.rs
//
// `veritas reputation [SOURCE]`: show one source or the whole registry.

use clap::Args;

use veritas_core::{SourceRecord, SourceState};

use crate::commands::Context;
use crate::error::CliError;
use crate::output::{format_json, format_table, OutputFormat, SourceRow};

#[derive(Debug, Args)]
pub struct ReputationCmd {
    /// Source to look up; lists every known source when omitted.
    pub source: Option<String>,

    #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

pub fn run(cmd: &ReputationCmd, ctx: &Context) -> Result<(), CliError> {
    let ledger = ctx.evaluator.ledger();
    let rows: Vec<(SourceRecord, SourceState)> = match &cmd.source {
        // Unseen sources are shown at the default without being registered.
        Some(source) => {
            let record = ledger
                .record(source)?
                .unwrap_or_else(|| SourceRecord::new(source.as_str(), ledger.default_reputation()));
            vec![(record, ctx.evaluator.source_state(source)?)]
        }
        None => ledger
            .sources()?
            .into_iter()
            .map(|r| {
                let state = ledger.classify(r.reputation);
                (r, state)
            })
            .collect(),
    };

    if rows.is_empty() {
        println!("No sources in the registry.");
        return Ok(());
    }

    match cmd.output {
        OutputFormat::Json => {
            let records: Vec<&SourceRecord> = rows.iter().map(|(r, _)| r).collect();
            println!("{}", format_json(&records));
        }
        OutputFormat::Table | OutputFormat::Report => {
            let table: Vec<SourceRow> = rows
                .iter()
                .map(|(record, state)| SourceRow::new(record, *state))
                .collect();
            println!("{}", format_table(&table));
        }
    }
    Ok(())
}
