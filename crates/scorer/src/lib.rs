//! Hybrid BM25 + cosine scoring for the ticket search pipeline.
//!
//! Given a non-empty list of cosine hits and a raw query, [`hybrid_score`]
//! tokenizes each hit's text and the query through the BM25 branch of
//! `textproc`, scores them with a hand-rolled BM25-Okapi index, max-
//! normalizes both signals, and blends them under a caller-controlled
//! `alpha`.

mod bm25;
mod engine;
mod error;
mod normalize;
mod types;

pub use engine::hybrid_score;
pub use error::ScorerError;
pub use types::{ScoredHit, ScorerInput};
