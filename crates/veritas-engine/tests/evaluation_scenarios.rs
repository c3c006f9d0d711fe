// crates/veritas-engine/tests/evaluation_scenarios.rs
//
// End-to-end scenarios through `IntegrityEvaluator::evaluate`.

use std::sync::Arc;

use veritas_core::{
    EngineConfig, EntropyStatus, EvaluationIssue, Language, OperationalAction, ReputationStore,
    SlashOutcome, SourceRecord, SourceState,
};
use veritas_engine::IntegrityEvaluator;
use veritas_reputation::InMemoryReputationStore;

const EPS: f64 = 1e-9;

const SIGNAL_UK: &str = "Якщо чипи заблоковано, тоді результат дорівнює нулю.";
const NOISE_UK: &str = "ІСТОРИЧНО! Необхідно ТЕРМІНОВО! Катастрофа!!!";
const CHAOS_UK: &str = "Рептилоїди через масонську змову контролюють світову економіку.";
const SHOUT_EN: &str =
    "This is URGENT! You MUST act NOW! Unprecedented losses! Catastrophic panic!!!";
const CALM_EN: &str =
    "The council met on Tuesday to review the annual budget and discuss road repairs.";

fn evaluator() -> IntegrityEvaluator {
    IntegrityEvaluator::new(EngineConfig::default()).unwrap()
}

// ---------------------------------------------------------------------------
// Scenario A: signal-heavy text is rewarded
// ---------------------------------------------------------------------------

#[test]
fn scenario_a_signal_text_is_rewarded() {
    let ev = evaluator();
    let result = ev.evaluate(SIGNAL_UK, "news.example", None).unwrap();

    assert!(!result.is_error());
    assert_eq!(result.language, Language::Uk);
    assert!((result.entropy_index - 0.230579763069548).abs() < EPS);
    assert!(result.entropy_index < ev.config().thresholds.trusted);
    assert_eq!(result.status, EntropyStatus::Trusted);
    assert_eq!(result.slashing, SlashOutcome::Rewarded { amount: 0.05 });
    assert_eq!(result.reputation_before, 0.5);
    assert!((result.reputation_after - 0.55).abs() < EPS);
    assert!(result.reputation_after >= 0.5);
    assert!(!result.intervention_required);
    assert_eq!(result.verdict, "СТАБІЛЬНИЙ ЛОГІЧНИЙ СИГНАЛ");

    let rec = result.recommendation.unwrap();
    assert_eq!(rec.action, "Використовувати");
    assert_eq!(rec.trust_level, "Високий");
    assert!(!rec.critical_thinking_required);

    assert!((ev.get_reputation("news.example").unwrap() - 0.55).abs() < EPS);
}

// ---------------------------------------------------------------------------
// Scenario B: noise and shouting are slashed
// ---------------------------------------------------------------------------

#[test]
fn scenario_b_noise_text_is_slashed() {
    let ev = evaluator();
    let result = ev.evaluate(NOISE_UK, "news.example", None).unwrap();

    assert_eq!(result.language, Language::Uk);
    assert!((result.entropy_index - 0.792395492248824).abs() < EPS);
    assert!(result.entropy_index > ev.config().thresholds.suspicious);
    assert_eq!(result.status, EntropyStatus::Warning);
    assert!(result.reputation_after < 0.5);
    assert!((result.reputation_after - (0.5 - 0.792395492248824 * 0.4)).abs() < EPS);
    assert!(matches!(result.slashing, SlashOutcome::Penalized { .. }));

    // Reputation fell below the intervention floor.
    assert!(result.intervention_required);
    assert_eq!(result.source_state, SourceState::Quarantine);
    assert_eq!(result.source_action, OperationalAction::Quarantine);
    assert_eq!(result.diagnostics.shout_factor, 1.0);
    assert_eq!(result.diagnostics.noise_markers, 4);
}

#[test]
fn english_shouting_is_flagged() {
    let ev = evaluator();
    let result = ev.evaluate(SHOUT_EN, "tabloid.example", None).unwrap();
    assert_eq!(result.language, Language::En);
    assert!(result.entropy_index > 0.75 && result.entropy_index < 0.85);
    assert_eq!(result.status, EntropyStatus::Warning);
    assert_eq!(result.verdict, "HIGH LEVEL OF MANIPULATION");
    assert_eq!(result.recommendation.unwrap().action, "Avoid");
}

#[test]
fn neutral_english_is_rewarded() {
    let ev = evaluator();
    let result = ev.evaluate(CALM_EN, "council.example", None).unwrap();
    assert_eq!(result.language, Language::En);
    assert_eq!(result.status, EntropyStatus::Trusted);
    assert!(result.entropy_index < 0.35);
    assert!(result.reputation_after > 0.5);
}

// ---------------------------------------------------------------------------
// Scenario C: chaos dominates
// ---------------------------------------------------------------------------

#[test]
fn scenario_c_chaos_is_critical_for_any_reputation() {
    let mut config = EngineConfig::default();
    config.seed_sources.insert("trusted.example".to_string(), 1.0);
    let ev = IntegrityEvaluator::new(config).unwrap();

    let result = ev.evaluate(CHAOS_UK, "trusted.example", None).unwrap();
    assert!(result.chaos_detected);
    assert!(result.entropy_index >= 0.99);
    assert_eq!(result.status, EntropyStatus::Critical);
    assert!(result.intervention_required);
    assert_eq!(result.verdict, "КОНСПІРОЛОГІЯ / ВИЯВЛЕНО ХАОС");
    assert!(result.diagnostics.chaos_short_circuit);
    assert_eq!(result.diagnostics.chaos_markers, 2);
    assert!(result.reputation_after < 1.0);
}

#[test]
fn chaos_marker_wins_over_calm_context() {
    let ev = evaluator();
    let text = format!("{} Some say the illuminati approved it.", CALM_EN);
    let result = ev.evaluate(&text, "council.example", Some("en")).unwrap();
    assert!(result.entropy_index >= 0.99);
    assert_eq!(result.status, EntropyStatus::Critical);
}

// ---------------------------------------------------------------------------
// Scenario D: repeated penalties keep lowering reputation
// ---------------------------------------------------------------------------

#[test]
fn scenario_d_repeated_penalties_strictly_decrease() {
    let ev = evaluator();
    let mut previous = ev.get_reputation("spam.example").unwrap();
    let mut calls = 0;
    loop {
        let result = ev.evaluate(NOISE_UK, "spam.example", None).unwrap();
        calls += 1;
        if previous == 0.0 {
            assert_eq!(result.reputation_after, 0.0);
            break;
        }
        assert!(result.reputation_after < previous);
        previous = result.reputation_after;
        assert!(calls < 10, "reputation never reached zero");
    }
    let record = ev.ledger().record("spam.example").unwrap().unwrap();
    assert_eq!(record.evaluations, calls);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn results_stay_in_range() {
    let ev = evaluator();
    let texts = [
        SIGNAL_UK,
        NOISE_UK,
        CHAOS_UK,
        SHOUT_EN,
        CALM_EN,
        "!!!!!!!!!!!!!!!!!!!!!!!!",
        "1 2 3 4 5 6 7 8 9 10 11 12",
        "Quantum soup recipes are trending among home cooks this winter season.",
    ];
    for text in texts {
        for _ in 0..5 {
            let r = ev.evaluate(text, "range.example", None).unwrap();
            assert!((0.0..=0.999).contains(&r.entropy_index), "{:?}", text);
            assert!((0.0..=1.0).contains(&r.reputation_after), "{:?}", text);
        }
    }
}

#[test]
fn detection_is_idempotent() {
    let ev = evaluator();
    for text in [SIGNAL_UK, NOISE_UK, SHOUT_EN, CALM_EN, "важливо катастрофа перемога"] {
        assert_eq!(ev.detect_language(text), ev.detect_language(text));
    }
}

#[test]
fn higher_entropy_never_yields_higher_reputation() {
    // Same prior reputation, texts in ascending entropy order.
    let texts = [SIGNAL_UK, CALM_EN, NOISE_UK, CHAOS_UK];
    let mut last_entropy = f64::NEG_INFINITY;
    let mut last_reputation = f64::INFINITY;
    let mut pairs: Vec<(f64, f64)> = texts
        .iter()
        .map(|t| {
            let r = evaluator().evaluate(t, "fixed.example", None).unwrap();
            (r.entropy_index, r.reputation_after)
        })
        .collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
    for (entropy, reputation) in pairs {
        assert!(entropy >= last_entropy);
        assert!(reputation <= last_reputation);
        last_entropy = entropy;
        last_reputation = reputation;
    }
}

#[test]
fn length_boundary_is_inclusive() {
    let ev = evaluator();
    let accepted = ev.evaluate("  abcdefghij  ", "edge.example", None).unwrap();
    assert!(!accepted.is_error());

    let rejected = ev.evaluate("abcdefghi", "edge.example", None).unwrap();
    assert_eq!(
        rejected.error,
        Some(EvaluationIssue::EmptyInput { chars: 9, minimum: 10 })
    );
    assert_eq!(rejected.status, EntropyStatus::Unscored);
    assert_eq!(rejected.reputation_after, accepted.reputation_after);
}

#[test]
fn empty_text_is_a_well_formed_result() {
    let ev = evaluator();
    let result = ev.evaluate("", "empty.example", Some("xx")).unwrap();
    assert!(result.is_error());
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.verdict, "TEXT TOO SHORT FOR ANALYSIS");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["status"], "UNSCORED");
    assert_eq!(json["error"]["kind"], "empty_input");
    assert!(ev.ledger().sources().unwrap().is_empty());
}

#[test]
fn rejected_text_from_low_source_still_requires_intervention() {
    let mut config = EngineConfig::default();
    config.seed_sources.insert("low.example".to_string(), 0.1);
    let ev = IntegrityEvaluator::new(config).unwrap();

    let result = ev.evaluate("short", "low.example", None).unwrap();
    assert!(result.is_error());
    assert_eq!(result.reputation_after, 0.1);
    assert!(result.reputation_after < ev.config().slashing.intervention_floor);
    assert!(result.intervention_required);
    assert_eq!(result.source_state, SourceState::Quarantine);
    assert_eq!(ev.get_reputation("low.example").unwrap(), 0.1);
}

#[test]
fn overrides_change_classification() {
    let mut overrides = std::collections::BTreeMap::new();
    overrides.insert("trusted".to_string(), 0.2);
    overrides.insert("penalty_multiplier".to_string(), 0.1);
    let config = EngineConfig::default().with_overrides(&overrides).unwrap();
    let ev = IntegrityEvaluator::new(config).unwrap();

    let result = ev.evaluate(SIGNAL_UK, "news.example", None).unwrap();
    assert_eq!(result.status, EntropyStatus::Acceptable);
    assert_eq!(result.slashing, SlashOutcome::Unchanged);
    assert_eq!(result.reputation_after, 0.5);
}

#[test]
fn shared_store_sees_updates() {
    let store = Arc::new(InMemoryReputationStore::new());
    store.put(SourceRecord::new("wire.example", 0.9)).unwrap();
    let ev = IntegrityEvaluator::with_store(EngineConfig::default(), store.clone()).unwrap();

    ev.evaluate(NOISE_UK, "wire.example", None).unwrap();
    let stored = store.get("wire.example").unwrap().unwrap();
    assert!(stored.reputation < 0.9);
    assert_eq!(stored.evaluations, 1);
    assert!(stored.updated_at.is_some());
}
