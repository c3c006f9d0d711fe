// crates/veritas-entropy/src/tokens.rs
//
// Tokenization shared by the detector and the calculator.
//
// Word tokens are maximal runs of Unicode word characters over the lowercased
// text, so "Якщо, тоді" yields ["якщо", "тоді"].

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\.?\d*").expect("number pattern is valid"));

/// A trimmed text with its lowercased form and word tokens.
#[derive(Debug, Clone)]
pub struct TokenizedText<'a> {
    /// The trimmed input, original casing.
    pub raw: &'a str,
    /// Lowercased `raw`.
    pub lower: String,
    /// Word tokens of `lower`, in order.
    pub words: Vec<String>,
}

impl<'a> TokenizedText<'a> {
    /// Trim and tokenize `text`.
    pub fn new(text: &'a str) -> Self {
        let raw = text.trim();
        let lower = raw.to_lowercase();
        let words = WORD_RE
            .find_iter(&lower)
            .map(|m| m.as_str().to_string())
            .collect();
        Self { raw, lower, words }
    }

    /// Number of Unicode scalar values in the trimmed text.
    pub fn char_count(&self) -> usize {
        self.raw.chars().count()
    }

    /// Number of word tokens.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of numeric tokens (`\d+\.?\d*`) in the trimmed text.
    pub fn numeric_count(&self) -> usize {
        NUMBER_RE.find_iter(self.raw).count()
    }
}

/// Split a marker term into its word tokens (lowercased).
///
/// Single-word markers yield one token; phrases such as "flat earth" yield
/// several and are matched as contiguous token sequences.
pub fn marker_tokens(term: &str) -> Vec<String> {
    let lower = term.to_lowercase();
    WORD_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}
