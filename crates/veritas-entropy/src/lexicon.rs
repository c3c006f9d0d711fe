// crates/veritas-entropy/src/lexicon.rs
//
// Marker vocabularies keyed by language tag.
//
// Each supported language carries three marker sets:
//   - noise:  emotional/rhetorical terms
//   - signal: logical/factual terms
//   - chaos:  conspiratorial terms (any hit dominates scoring)
// plus a short list of "incompatible concept clusters" used by the sanity
// check. The lexicon is built once and never mutated afterwards.

use std::collections::{BTreeMap, HashSet};

use veritas_core::Language;

use crate::tokens::{marker_tokens, TokenizedText};

const UK_NOISE: &[&str] = &[
    "етично", "необхідно", "важливо", "неприпустимо", "історично",
    "фундаментально", "занепокоєння", "перемога", "збитки", "довіра",
    "шокуюча", "паніка", "приховували", "потрясла", "сенсація", "терміново",
    "критично", "безпрецедентно", "катастрофа", "надзвичайно",
];

const EN_NOISE: &[&str] = &[
    "ethically", "necessarily", "important", "unacceptable", "historically",
    "fundamentally", "concern", "victory", "losses", "trust",
    "shocking", "panic", "hidden", "sensational", "must", "urgent",
    "unprecedented", "catastrophic", "critical", "extremely",
];

const UK_SIGNAL: &[&str] = &[
    "якщо", "тоді", "тому", "внаслідок", "дорівнює", "факт",
    "ресурс", "чип", "наказ", "координати", "результат",
    "даних", "показник", "вимір", "кількість", "дослідження",
    "статистичний", "кореляція", "регресія", "аналіз", "респондентів",
    "відсоток", "індекс", "коефіцієнт", "середній", "медіана",
    "гіпотеза", "метод", "експеримент", "вибірка",
];

const EN_SIGNAL: &[&str] = &[
    "if", "then", "therefore", "consequently", "equals", "fact",
    "resource", "chip", "order", "coordinates", "result",
    "data", "metric", "measurement", "quantity", "research",
    "statistical", "correlation", "regression", "analysis", "study",
    "rate", "inflation", "percentage", "indicates", "shows",
    "index", "coefficient", "average", "median", "respondents",
    "hypothesis", "method", "experiment", "sample",
];

const UK_CHAOS: &[&str] = &[
    "рептилоїди", "таємний", "змова", "плоска", "контролюють",
    "масони", "чіпування", "підземелля", "на слонах", "ілюмінати",
    "глобалісти", "світова змова", "заговір",
];

const EN_CHAOS: &[&str] = &[
    "lizard", "reptilian", "magic", "conspiracy", "secret",
    "freemasons", "microchip", "underground", "flat earth",
    "illuminati", "globalists", "new world order",
];

/// Domains whose vocabularies should not co-occur in coherent text.
const INCOMPATIBLE_CLUSTERS: &[&[&str]] = &[
    &["квантовий", "борщ", "зажарка", "5g", "quantum", "soup"],
    &["магія", "криптовалюта", "сметана", "magic", "crypto", "blockchain"],
];

/// Characters that identify a language on sight.
const UK_DISTINGUISHING: &[char] = &['ї', 'і', 'є', 'ґ'];

/// A set of marker terms split into single-token words and multi-token phrases.
#[derive(Debug, Clone, Default)]
pub struct MarkerSet {
    words: HashSet<String>,
    phrases: Vec<Vec<String>>,
    terms: Vec<String>,
}

impl MarkerSet {
    /// Build a marker set from raw terms (case-insensitive).
    pub fn new<'t>(terms: impl IntoIterator<Item = &'t str>) -> Self {
        let mut set = MarkerSet::default();
        for term in terms {
            set.insert(term);
        }
        set
    }

    fn insert(&mut self, term: &str) {
        let tokens = marker_tokens(term);
        match tokens.len() {
            0 => return,
            1 => {
                self.words.extend(tokens);
            }
            _ => {
                if !self.phrases.contains(&tokens) {
                    self.phrases.push(tokens);
                }
            }
        }
        self.terms.push(term.to_lowercase());
    }

    /// Count marker hits in a tokenized text.
    ///
    /// Single-word markers count every whole-token occurrence; phrases count
    /// every contiguous occurrence of their token sequence.
    pub fn count(&self, text: &TokenizedText<'_>) -> usize {
        let word_hits = text
            .words
            .iter()
            .filter(|w| self.words.contains(w.as_str()))
            .count();
        let phrase_hits: usize = self
            .phrases
            .iter()
            .map(|phrase| {
                text.words
                    .windows(phrase.len())
                    .filter(|window| window == &phrase.as_slice())
                    .count()
            })
            .sum();
        word_hits + phrase_hits
    }

    /// Count occurrences of every term as a raw substring of `lower`.
    ///
    /// Used by language detection, which runs before tokenization matters.
    pub fn count_substrings(&self, lower: &str) -> usize {
        self.terms.iter().map(|t| lower.matches(t.as_str()).count()).sum()
    }
}

/// Noise, signal and chaos markers for one language.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub noise: MarkerSet,
    pub signal: MarkerSet,
    pub chaos: MarkerSet,
    /// Characters that classify a text as this language immediately.
    pub distinguishing_chars: Vec<char>,
}

/// Keyed lookup table: language tag -> vocabulary, plus sanity clusters.
#[derive(Debug, Clone)]
pub struct Lexicon {
    vocabularies: BTreeMap<Language, Vocabulary>,
    chaos_all: MarkerSet,
    clusters: Vec<HashSet<String>>,
}

impl Lexicon {
    /// The built-in Ukrainian/English lexicon.
    pub fn builtin() -> Self {
        let mut vocabularies = BTreeMap::new();
        vocabularies.insert(
            Language::Uk,
            Vocabulary {
                noise: MarkerSet::new(UK_NOISE.iter().copied()),
                signal: MarkerSet::new(UK_SIGNAL.iter().copied()),
                chaos: MarkerSet::new(UK_CHAOS.iter().copied()),
                distinguishing_chars: UK_DISTINGUISHING.to_vec(),
            },
        );
        vocabularies.insert(
            Language::En,
            Vocabulary {
                noise: MarkerSet::new(EN_NOISE.iter().copied()),
                signal: MarkerSet::new(EN_SIGNAL.iter().copied()),
                chaos: MarkerSet::new(EN_CHAOS.iter().copied()),
                distinguishing_chars: Vec::new(),
            },
        );

        let clusters = INCOMPATIBLE_CLUSTERS
            .iter()
            .map(|cluster| cluster.iter().map(|t| t.to_lowercase()).collect())
            .collect();

        Self::from_parts(vocabularies, clusters)
    }

    /// Build a lexicon from explicit parts. The union of all chaos sets is
    /// derived here.
    pub fn from_parts(
        vocabularies: BTreeMap<Language, Vocabulary>,
        clusters: Vec<HashSet<String>>,
    ) -> Self {
        let chaos_all = MarkerSet::new(
            vocabularies
                .values()
                .flat_map(|v| v.chaos.terms.iter().map(String::as_str)),
        );
        Self {
            vocabularies,
            chaos_all,
            clusters,
        }
    }

    /// Vocabulary for a language, if the lexicon carries one.
    pub fn vocabulary(&self, language: Language) -> Option<&Vocabulary> {
        self.vocabularies.get(&language)
    }

    /// All (language, vocabulary) pairs in tag order.
    pub fn vocabularies(&self) -> impl Iterator<Item = (Language, &Vocabulary)> {
        self.vocabularies.iter().map(|(l, v)| (*l, v))
    }

    /// Chaos markers of every language combined.
    pub fn chaos_markers(&self) -> &MarkerSet {
        &self.chaos_all
    }

    /// Incompatible concept clusters (lowercased).
    pub fn clusters(&self) -> &[HashSet<String>] {
        &self.clusters
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}
