// crates/veritas-entropy/src/detector.rs
//
// Language detection for marker vocabulary selection.

use std::sync::Arc;

use veritas_core::Language;

use crate::lexicon::Lexicon;

/// Classifies text into a supported language tag.
///
/// A language-distinguishing character classifies the text immediately.
/// Otherwise each language's noise markers are counted as substrings of the
/// lowercased text; the unique highest count wins and ties resolve to the
/// configured default. Detection is a pure function of the text.
#[derive(Debug, Clone)]
pub struct LanguageDetector {
    lexicon: Arc<Lexicon>,
    default_language: Language,
}

impl LanguageDetector {
    pub fn new(lexicon: Arc<Lexicon>, default_language: Language) -> Self {
        Self {
            lexicon,
            default_language,
        }
    }

    /// Detect the language of `text`.
    pub fn detect(&self, text: &str) -> Language {
        let lower = text.to_lowercase();

        for (language, vocab) in self.lexicon.vocabularies() {
            if lower.chars().any(|c| vocab.distinguishing_chars.contains(&c)) {
                return language;
            }
        }

        let mut best: Option<Language> = None;
        let mut best_score = 0usize;
        let mut tied = false;

        for (language, vocab) in self.lexicon.vocabularies() {
            let score = vocab.noise.count_substrings(&lower);
            if score > best_score {
                best_score = score;
                best = Some(language);
                tied = false;
            } else if score == best_score && score > 0 {
                tied = true;
            }
        }

        match best {
            Some(language) if !tied => language,
            _ => self.default_language,
        }
    }
}
