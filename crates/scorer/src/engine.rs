//! The hybrid scorer: blends a hand-rolled BM25-Okapi score with the cosine
//! score the vector index already produced.

use crate::bm25::Bm25Index;
use crate::error::ScorerError;
use crate::normalize::max_normalize;
use crate::types::{ScoredHit, ScorerInput};

/// Score `hits` against `query` under mix parameter `alpha`.
///
/// Empty `hits` returns an empty list, not an error. `alpha` outside
/// `[0, 1]` fails with [`ScorerError::InvalidAlpha`]. Never mutates its
/// inputs.
pub fn hybrid_score(
    hits: &[ScorerInput],
    query: &str,
    alpha: f32,
) -> Result<Vec<ScoredHit>, ScorerError> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(ScorerError::InvalidAlpha(alpha));
    }
    if hits.is_empty() {
        return Ok(Vec::new());
    }

    let cosine_scores: Vec<f32> = hits.iter().map(|h| h.cosine).collect();
    let doc_tokens: Vec<Vec<String>> = hits
        .iter()
        .map(|h| textproc::to_bm25_tokens(&h.text))
        .collect();
    let query_tokens = textproc::to_bm25_tokens(query);

    let bm25_index = Bm25Index::new(&doc_tokens);
    let bm25_scores = bm25_index.score(&query_tokens);

    let bm25_norm = max_normalize(&bm25_scores);
    let cosine_norm = max_normalize(&cosine_scores);

    let mut scored: Vec<ScoredHit> = hits
        .iter()
        .enumerate()
        .map(|(i, hit)| ScoredHit {
            id: hit.id,
            score: alpha * bm25_norm[i] + (1.0 - alpha) * cosine_norm[i],
            registry_date: hit.registry_date,
        })
        .collect();

    // Stable sort preserves insertion order among ties, as required.
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

    Ok(scored)
}
