// crates/veritas-cli/src/output.rs
//
// Output formatting for the Veritas CLI.
// Supports table, JSON, and localized plain-text report output.

use clap::ValueEnum;
use serde::Serialize;
use tabled::{Table, Tabled};

use veritas_core::{EvaluationResult, Language, SourceRecord, SourceState};

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed table output.
    Table,
    /// JSON output for machine consumption.
    Json,
    /// Human-readable report in the language of the text.
    Report,
}

/// Format a slice of Tabled items as a table string.
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    Table::new(data).to_string()
}

/// Format a serializable value as a pretty-printed JSON string.
pub fn format_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|e| format!("JSON serialization error: {}", e))
}

/// One evaluation as a key/value table.
#[derive(Tabled)]
pub struct FieldRow {
    #[tabled(rename = "Field")]
    pub field: &'static str,
    #[tabled(rename = "Value")]
    pub value: String,
}

pub fn evaluation_rows(result: &EvaluationResult) -> Vec<FieldRow> {
    let d = &result.diagnostics;
    let mut rows = vec![
        row("Source", result.source_id.clone()),
        row("Language", result.language.to_string()),
        row("Entropy index", format!("{:.3}", result.entropy_index)),
        row("Status", result.status.to_string()),
        row("Verdict", result.verdict.clone()),
        row(
            "Reputation",
            format!("{:.3} -> {:.3}", result.reputation_before, result.reputation_after),
        ),
        row(
            "Source state",
            format!("{} ({})", result.source_state, result.source_action),
        ),
        row("Intervention", yes_no(result.intervention_required).to_string()),
        row("Characters", d.char_count.to_string()),
        row("Words", d.word_count.to_string()),
    ];
    if result.chaos_detected {
        rows.push(row("Chaos markers", d.chaos_markers.to_string()));
    } else if !result.is_error() {
        rows.extend([
            row("Character entropy", format!("{:.3}", d.character_entropy)),
            row("Complexity", format!("{:.3}", d.complexity)),
            row(
                "Markers (noise/signal)",
                format!("{}/{}", d.noise_markers, d.signal_markers),
            ),
            row("Numeric density", format!("{:.3}", d.numeric_density)),
            row("Shout factor", format!("{:.3}", d.shout_factor)),
            row("Sanity penalty", format!("{:.2}", d.sanity_penalty)),
            row("Calibrated", yes_no(d.calibrated).to_string()),
        ]);
    }
    if let Some(issue) = &result.error {
        rows.push(row("Error", issue.to_string()));
    }
    for warning in &result.warnings {
        rows.push(row("Warning", warning.to_string()));
    }
    rows
}

fn row(field: &'static str, value: String) -> FieldRow {
    FieldRow { field, value }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// A source in the reputation registry.
#[derive(Tabled)]
pub struct SourceRow {
    #[tabled(rename = "Source")]
    pub source: String,
    #[tabled(rename = "Reputation")]
    pub reputation: String,
    #[tabled(rename = "State")]
    pub state: String,
    #[tabled(rename = "Action")]
    pub action: String,
    #[tabled(rename = "Evaluations")]
    pub evaluations: u64,
    #[tabled(rename = "Updated")]
    pub updated: String,
}

impl SourceRow {
    pub fn new(record: &SourceRecord, state: SourceState) -> Self {
        Self {
            source: record.id.clone(),
            reputation: format!("{:.3}", record.reputation),
            state: state.to_string(),
            action: state.action().to_string(),
            evaluations: record.evaluations,
            updated: record
                .updated_at
                .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Plain-text report in the language of the evaluated text.
pub fn format_report(result: &EvaluationResult) -> String {
    let labels = ReportLabels::for_language(result.language);
    let rule = "-".repeat(60);
    let mut out = String::new();

    out.push_str(&format!("VERITAS | {}\n{}\n", labels.title, rule));
    out.push_str(&format!("{:<22} {}\n", labels.source, result.source_id));
    out.push_str(&format!(
        "{:<22} {}\n",
        labels.time,
        result.evaluated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    if let Some(issue) = &result.error {
        out.push_str(&format!("\n{}\n{}\n", result.verdict, issue));
        return out;
    }

    out.push_str(&format!("{:<22} {:.3}\n", labels.entropy, result.entropy_index));
    out.push_str(&format!(
        "{:<22} {:.2} -> {:.2}\n",
        labels.reputation, result.reputation_before, result.reputation_after
    ));
    out.push_str(&format!("{:<22} {}\n", labels.status, result.status));
    out.push_str(&format!("{:<22} {}\n", labels.verdict, result.verdict));
    out.push_str(&format!(
        "{:<22} {} / {}\n",
        labels.source_state, result.source_state, result.source_action
    ));

    if let Some(rec) = &result.recommendation {
        out.push_str(&format!("\n{}\n{}\n\n", labels.recommendations, rule));
        out.push_str(&format!("{}\n", rec.message));
        out.push_str(&format!("  {:<20} {}\n", labels.action, rec.action));
        out.push_str(&format!("  {:<20} {}\n", labels.trust_level, rec.trust_level));
        let thinking = if rec.critical_thinking_required {
            labels.high
        } else {
            labels.low
        };
        out.push_str(&format!("  {:<20} {}\n", labels.critical_thinking, thinking));
    }

    for warning in &result.warnings {
        out.push_str(&format!("\n! {}", warning));
    }
    if result.intervention_required {
        out.push_str(&format!("\n{}\n", labels.intervention));
    }
    out
}

struct ReportLabels {
    title: &'static str,
    source: &'static str,
    time: &'static str,
    entropy: &'static str,
    reputation: &'static str,
    status: &'static str,
    verdict: &'static str,
    source_state: &'static str,
    recommendations: &'static str,
    action: &'static str,
    trust_level: &'static str,
    critical_thinking: &'static str,
    high: &'static str,
    low: &'static str,
    intervention: &'static str,
}

impl ReportLabels {
    fn for_language(language: Language) -> Self {
        match language {
            Language::Uk => Self {
                title: "АНАЛІЗ ТЕКСТУ",
                source: "Джерело:",
                time: "Час аналізу:",
                entropy: "Індекс ентропії:",
                reputation: "Репутація джерела:",
                status: "Статус:",
                verdict: "Вердикт:",
                source_state: "Стан джерела:",
                recommendations: "РЕКОМЕНДАЦІЇ",
                action: "Дія:",
                trust_level: "Рівень довіри:",
                critical_thinking: "Критичне мислення:",
                high: "Високий",
                low: "Низький",
                intervention: "ПОТРІБНЕ ВТРУЧАННЯ!",
            },
            Language::En => Self {
                title: "TEXT ANALYSIS",
                source: "Source:",
                time: "Analysis time:",
                entropy: "Entropy index:",
                reputation: "Source reputation:",
                status: "Status:",
                verdict: "Verdict:",
                source_state: "Source state:",
                recommendations: "RECOMMENDATIONS",
                action: "Action:",
                trust_level: "Trust level:",
                critical_thinking: "Critical thinking:",
                high: "High",
                low: "Low",
                intervention: "INTERVENTION REQUIRED!",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veritas_engine::IntegrityEvaluator;

    fn evaluate(text: &str) -> EvaluationResult {
        IntegrityEvaluator::new(Default::default())
            .unwrap()
            .evaluate(text, "report.example", None)
            .unwrap()
    }

    #[test]
    fn report_is_localized() {
        let uk = format_report(&evaluate("ІСТОРИЧНО! Необхідно ТЕРМІНОВО! Катастрофа!!!"));
        assert!(uk.contains("Індекс ентропії:"));
        assert!(uk.contains("ПОТРІБНЕ ВТРУЧАННЯ!"));

        let en = format_report(&evaluate(
            "The council met on Tuesday to review the annual budget and discuss road repairs.",
        ));
        assert!(en.contains("Entropy index:"));
        assert!(en.contains("RECOMMENDATIONS"));
        assert!(!en.contains("INTERVENTION REQUIRED!"));
    }

    #[test]
    fn rejected_report_shows_issue() {
        let report = format_report(&evaluate("short"));
        assert!(report.contains("TEXT TOO SHORT FOR ANALYSIS"));
        assert!(!report.contains("Entropy index:"));
    }

    #[test]
    fn table_lists_diagnostics_for_scored_text() {
        let result = evaluate("The council met on Tuesday to review the annual budget.");
        let table = format_table(&evaluation_rows(&result));
        assert!(table.contains("Shout factor"));
        assert!(table.contains("report.example"));
    }

    #[test]
    fn json_round_trips_the_result() {
        let result = evaluate("The council met on Tuesday to review the annual budget.");
        let json = format_json(&result);
        let back: EvaluationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.evaluation_id, result.evaluation_id);
    }
}
