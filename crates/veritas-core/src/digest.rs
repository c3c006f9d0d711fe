// crates/veritas-core/src/digest.rs

use sha2::{Digest, Sha256};

/// SHA-256 of the given text, hex-encoded.
///
/// Used as a content fingerprint so history stores can deduplicate
/// repeated submissions of the same text.
pub fn text_digest(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}
