// crates/veritas-core/src/language.rs
//
// Supported language tags. A tag selects the marker vocabulary and the
// language of verdict strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VeritasError;

/// A supported language tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Ukrainian (`"uk"`).
    Uk,
    /// English (`"en"`).
    En,
}

impl Language {
    /// All supported languages, in lookup-table order.
    pub const ALL: [Language; 2] = [Language::Uk, Language::En];

    /// The lowercase wire tag for this language.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Uk => "uk",
            Language::En => "en",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = VeritasError;

    /// Parse a tag case-insensitively. `"ua"` is accepted as an alias for `"uk"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uk" | "ua" => Ok(Language::Uk),
            "en" => Ok(Language::En),
            other => Err(VeritasError::InvalidInput(format!(
                "unsupported language tag: {:?}",
                other
            ))),
        }
    }
}
