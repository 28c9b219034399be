//! The BM25 branch: shared cleaning plus charset restriction, stemming,
//! stopword removal, and whitespace tokenization.

use rust_stemmers::{Algorithm, Stemmer};
use unicode_normalization::UnicodeNormalization;

use crate::config::{is_stopword, LATIN_NOISE_RE, NON_CANONICAL_RE, WHITESPACE_RE};
use crate::normalize::clean;

/// Turn raw ticket text into the token stream the lexical index scores
/// against. Deterministic: the same input always yields the same tokens.
pub fn to_bm25_tokens(input: &str) -> Vec<String> {
    let cleaned = clean(input);
    let normalized: String = cleaned.nfkc().collect();
    let canonical = NON_CANONICAL_RE.replace_all(&normalized, "");
    let no_latin_noise = LATIN_NOISE_RE.replace_all(&canonical, "");
    let collapsed = WHITESPACE_RE.replace_all(&no_latin_noise, " ");

    let stemmer = Stemmer::create(Algorithm::Russian);
    collapsed
        .split_whitespace()
        .map(|word| stemmer.stem(word).into_owned())
        .filter(|stemmed| !stemmed.is_empty() && !is_stopword(stemmed))
        .collect()
}
