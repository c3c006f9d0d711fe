// crates/veritas-entropy/src/signals.rs
//
// Individual text measurements feeding the composite entropy score.
//
// Each function is pure and returns a value the calculator combines with the
// configured weights. None of them look at marker vocabularies except
// `sanity_penalty`, which takes the incompatible clusters explicitly.

use std::collections::{BTreeMap, HashSet};

use veritas_core::CompositeWeights;

use crate::tokens::TokenizedText;

/// Maximum bits per symbol used to normalize Shannon entropy.
pub const MAX_BITS_PER_SYMBOL: f64 = 8.0;

/// Chunks longer than this many characters count as shouted when fully
/// uppercase. Shorter ones are treated as abbreviations.
pub const CAPS_MIN_CHARS: usize = 6;

pub const EXCLAMATION_WEIGHT: f64 = 2.0;
pub const CAPS_WORD_WEIGHT: f64 = 3.0;
pub const QUESTION_WEIGHT: f64 = 1.0;

/// Normalized Shannon entropy of the character distribution, in [0, 1].
///
/// Computed over the lowercased text with `!` and `?` removed: emphasis is
/// measured by `shout_factor` alone, so casing and emphasis punctuation never
/// move this component. Counts are summed in character order so identical
/// text always yields bit-identical output.
pub fn character_entropy(text: &TokenizedText<'_>) -> f64 {
    let mut freq: BTreeMap<char, usize> = BTreeMap::new();
    let mut total = 0usize;
    for c in text.lower.chars().filter(|c| *c != '!' && *c != '?') {
        *freq.entry(c).or_insert(0) += 1;
        total += 1;
    }
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    let entropy: f64 = freq
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();

    (entropy / MAX_BITS_PER_SYMBOL).clamp(0.0, 1.0)
}

/// Lexical complexity: 1 - unique/total word ratio.
///
/// Repetitive text scores high. Long texts with high complexity are damped,
/// since technical prose legitimately repeats its terms. No words -> 1.0.
pub fn lexical_complexity(words: &[String], weights: &CompositeWeights) -> f64 {
    if words.is_empty() {
        return 1.0;
    }
    let unique: HashSet<&str> = words.iter().map(String::as_str).collect();
    let diversity = unique.len() as f64 / words.len() as f64;
    let mut complexity = 1.0 - diversity;

    if words.len() > weights.long_text_words && complexity > weights.long_text_complexity {
        complexity *= weights.long_text_damping;
    }
    complexity
}

/// noise / (signal + noise + 1), or `None` when neither class was seen.
pub fn marker_ratio(noise: usize, signal: usize) -> Option<f64> {
    if noise + signal == 0 {
        return None;
    }
    Some(noise as f64 / (signal + noise + 1) as f64)
}

/// Numeric tokens per word: numbers / (words + 1). Zero for wordless text.
pub fn numeric_density(text: &TokenizedText<'_>) -> f64 {
    let words = text.word_count();
    if words == 0 {
        return 0.0;
    }
    text.numeric_count() as f64 / (words + 1) as f64
}

/// Emphasis pressure from caps words, `!` and `?`, in [0, 1].
pub fn shout_factor(text: &TokenizedText<'_>) -> f64 {
    let words = text.word_count();
    if words == 0 {
        return 0.0;
    }

    let caps_words = text.raw.split_whitespace().filter(|w| is_shouted(w)).count();
    let exclamations = text.raw.matches('!').count();
    let questions = text.raw.matches('?').count();

    let shout = (exclamations as f64 * EXCLAMATION_WEIGHT
        + caps_words as f64 * CAPS_WORD_WEIGHT
        + questions as f64 * QUESTION_WEIGHT)
        / (words + 1) as f64;
    shout.min(1.0)
}

/// A whitespace-separated chunk is shouted when it is long enough, has at
/// least one cased letter, and no lowercase letter.
fn is_shouted(chunk: &str) -> bool {
    chunk.chars().count() >= CAPS_MIN_CHARS
        && chunk.chars().any(|c| c.is_uppercase())
        && !chunk.chars().any(|c| c.is_lowercase())
}

/// `penalty` when two or more terms of any one cluster co-occur, else 0.
pub fn sanity_penalty(words: &[String], clusters: &[HashSet<String>], penalty: f64) -> f64 {
    let present: HashSet<&str> = words.iter().map(String::as_str).collect();
    let incoherent = clusters.iter().any(|cluster| {
        cluster
            .iter()
            .filter(|term| present.contains(term.as_str()))
            .take(2)
            .count()
            >= 2
    });
    if incoherent {
        penalty
    } else {
        0.0
    }
}
