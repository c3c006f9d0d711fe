// crates/veritas-engine/src/verdicts.rs
//
// Localized verdict and recommendation texts.

use veritas_core::{EntropyStatus, Language, Recommendation};

/// Entropy below which critical reading is not required.
pub const CRITICAL_THINKING_CUTOFF: f64 = 0.3;

/// Ascending entropy cutoffs of the five trust levels.
const TRUST_LEVEL_CUTOFFS: [f64; 4] = [0.2, 0.4, 0.6, 0.8];

const TRUST_LEVELS_UK: [&str; 5] = ["Дуже високий", "Високий", "Середній", "Низький", "Дуже низький"];
const TRUST_LEVELS_EN: [&str; 5] = ["Very High", "High", "Medium", "Low", "Very Low"];

/// Verdict for a status. `chaos` selects the conspiracy verdict, which
/// replaces the ordinary CRITICAL text.
pub fn verdict(status: EntropyStatus, chaos: bool, language: Language) -> &'static str {
    if chaos {
        return match language {
            Language::Uk => "КОНСПІРОЛОГІЯ / ВИЯВЛЕНО ХАОС",
            Language::En => "CONSPIRACY / CHAOS DETECTED",
        };
    }
    match (language, status) {
        (Language::Uk, EntropyStatus::Unscored) => "ТЕКСТ ЗАНАДТО КОРОТКИЙ ДЛЯ АНАЛІЗУ",
        (Language::Uk, EntropyStatus::Trusted) => "СТАБІЛЬНИЙ ЛОГІЧНИЙ СИГНАЛ",
        (Language::Uk, EntropyStatus::Acceptable) => "ПРИЙНЯТНА СТРУКТУРОВАНА ІНФОРМАЦІЯ",
        (Language::Uk, EntropyStatus::Suspicious) => "ПІДОЗРІЛА ЕМОЦІЙНА РИТОРИКА",
        (Language::Uk, EntropyStatus::Warning) => "ВИСОКИЙ РІВЕНЬ МАНІПУЛЯЦІЇ",
        (Language::Uk, EntropyStatus::Critical) => "КРИТИЧНИЙ ІНФОРМАЦІЙНИЙ ХАОС",
        (Language::En, EntropyStatus::Unscored) => "TEXT TOO SHORT FOR ANALYSIS",
        (Language::En, EntropyStatus::Trusted) => "STABLE LOGICAL SIGNAL",
        (Language::En, EntropyStatus::Acceptable) => "ACCEPTABLE STRUCTURED INFORMATION",
        (Language::En, EntropyStatus::Suspicious) => "SUSPICIOUS EMOTIONAL RHETORIC",
        (Language::En, EntropyStatus::Warning) => "HIGH LEVEL OF MANIPULATION",
        (Language::En, EntropyStatus::Critical) => "CRITICAL INFORMATIONAL CHAOS",
    }
}

/// Five-level trust label keyed on entropy.
pub fn trust_level(entropy_index: f64, language: Language) -> &'static str {
    let level = TRUST_LEVEL_CUTOFFS
        .iter()
        .position(|&cutoff| entropy_index < cutoff)
        .unwrap_or(TRUST_LEVEL_CUTOFFS.len());
    match language {
        Language::Uk => TRUST_LEVELS_UK[level],
        Language::En => TRUST_LEVELS_EN[level],
    }
}

/// Reader guidance for a scored text. Returns `None` for unscored results.
pub fn recommendation(
    status: EntropyStatus,
    entropy_index: f64,
    language: Language,
) -> Option<Recommendation> {
    let message = match (language, status) {
        (_, EntropyStatus::Unscored) => return None,
        (Language::Uk, EntropyStatus::Trusted) => "Джерело можна вважати надійним",
        (Language::Uk, EntropyStatus::Acceptable) => "Рекомендується перевірка фактів",
        (Language::Uk, EntropyStatus::Suspicious) => {
            "Високий рівень риторики. Критичний аналіз обов'язковий"
        }
        (Language::Uk, EntropyStatus::Warning | EntropyStatus::Critical) => {
            "Джерело не рекомендується як основне"
        }
        (Language::En, EntropyStatus::Trusted) => "Source can be considered reliable",
        (Language::En, EntropyStatus::Acceptable) => "Fact-checking recommended",
        (Language::En, EntropyStatus::Suspicious) => {
            "High level of rhetoric. Critical analysis required"
        }
        (Language::En, EntropyStatus::Warning | EntropyStatus::Critical) => {
            "Source not recommended as primary"
        }
    };

    let usable = matches!(status, EntropyStatus::Trusted | EntropyStatus::Acceptable);
    let action = match (language, usable) {
        (Language::Uk, true) => "Використовувати",
        (Language::Uk, false) => "Уникати",
        (Language::En, true) => "Use",
        (Language::En, false) => "Avoid",
    };

    Some(Recommendation {
        message: message.to_string(),
        action: action.to_string(),
        trust_level: trust_level(entropy_index, language).to_string(),
        critical_thinking_required: entropy_index >= CRITICAL_THINKING_CUTOFF,
    })
}
