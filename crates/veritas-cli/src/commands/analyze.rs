// crates/veritas-cli/src/commands/analyze.rs
//
// `veritas analyze`: score a text and update its source's reputation.
//
// Text comes from --text, --file, or stdin, in that order of preference.

use std::fs;
use std::io::Read;

use clap::Args;

use crate::commands::Context;
use crate::error::CliError;
use crate::output::{evaluation_rows, format_json, format_report, format_table, OutputFormat};

#[derive(Debug, Args)]
pub struct AnalyzeCmd {
    /// Text to analyze.
    #[arg(long, short = 't', conflicts_with = "file")]
    pub text: Option<String>,

    /// File containing the text to analyze.
    #[arg(long, short = 'f')]
    pub file: Option<String>,

    /// Declared source of the text (domain, feed handle, ...).
    #[arg(long, short = 's', default_value = "manual-input")]
    pub source: String,

    /// Language of the text ("uk" or "en"); detected when omitted.
    #[arg(long)]
    pub lang: Option<String>,

    #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Report)]
    pub output: OutputFormat,
}

pub fn run(cmd: &AnalyzeCmd, ctx: &Context) -> Result<(), CliError> {
    let text = read_input(cmd)?;
    let result = ctx
        .evaluator
        .evaluate(&text, &cmd.source, cmd.lang.as_deref())?;

    match cmd.output {
        OutputFormat::Json => println!("{}", format_json(&result)),
        OutputFormat::Table => println!("{}", format_table(&evaluation_rows(&result))),
        OutputFormat::Report => println!("{}", format_report(&result)),
    }

    if let Some(issue) = &result.error {
        return Err(CliError::Rejected(issue.to_string()));
    }
    ctx.persist()
}

fn read_input(cmd: &AnalyzeCmd) -> Result<String, CliError> {
    if let Some(text) = &cmd.text {
        return Ok(text.clone());
    }
    if let Some(path) = &cmd.file {
        return Ok(fs::read_to_string(path)?);
    }
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
