//! The BERT branch: shared cleaning only, plus Latin-noise removal and
//! whitespace collapse. No charset restriction, stemming, or stopword
//! removal — the embedding model expects natural language, not tokens.

use unicode_normalization::UnicodeNormalization;

use crate::config::{LATIN_NOISE_RE, WHITESPACE_RE};
use crate::normalize::clean;

/// Turn raw ticket text into the string handed to the embedder.
pub fn to_bert_text(input: &str) -> String {
    let cleaned = clean(input);
    let normalized: String = cleaned.nfkc().collect();
    let no_latin_noise = LATIN_NOISE_RE.replace_all(&normalized, "");
    WHITESPACE_RE.replace_all(&no_latin_noise, " ").trim().to_string()
}
