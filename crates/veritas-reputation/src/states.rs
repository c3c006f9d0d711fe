// crates/veritas-reputation/src/states.rs
//
// Source states: a pure mapping from the current reputation value to a
// discrete operational state, plus localized human-readable descriptions.

use veritas_core::{Language, ReputationBands, SourceState};

/// Map a reputation to its source state using descending cutoffs.
///
/// Each cutoff is inclusive on its lower bound: a reputation exactly equal
/// to `bands.monitored` is MONITORED.
pub fn classify_reputation(reputation: f64, bands: &ReputationBands) -> SourceState {
    if reputation >= bands.stable_trust {
        SourceState::StableTrust
    } else if reputation >= bands.monitored {
        SourceState::Monitored
    } else if reputation >= bands.warning {
        SourceState::Warning
    } else if reputation >= bands.critical {
        SourceState::Critical
    } else {
        SourceState::Quarantine
    }
}

/// Human-readable description of a state in the given language.
pub fn describe(state: SourceState, language: Language) -> &'static str {
    match (language, state) {
        (Language::Uk, SourceState::StableTrust) => {
            "Джерело демонструє стабільно високу якість логічного сигналу"
        }
        (Language::Uk, SourceState::Monitored) => {
            "Джерело функціонує нормально, але під постійним моніторингом"
        }
        (Language::Uk, SourceState::Warning) => {
            "Виявлено підвищену ентропію. Рекомендована перевірка"
        }
        (Language::Uk, SourceState::Critical) => {
            "Критичне зниження якості. Необхідне термінове втручання"
        }
        (Language::Uk, SourceState::Quarantine) => {
            "Джерело ізольовано через систематичні порушення логічної цілісності"
        }
        (Language::En, SourceState::StableTrust) => {
            "Source shows a consistently high-quality logical signal"
        }
        (Language::En, SourceState::Monitored) => {
            "Source operates normally under continuous monitoring"
        }
        (Language::En, SourceState::Warning) => "Elevated entropy detected. Review recommended",
        (Language::En, SourceState::Critical) => {
            "Critical decline in quality. Urgent intervention required"
        }
        (Language::En, SourceState::Quarantine) => {
            "Source isolated after systematic logical integrity violations"
        }
    }
}
