//! Aggregated error type for the search engine façade, following the same
//! `#[from]`-per-downstream-crate convention every crate in this workspace
//! uses for its own error enum.

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EngineError {
    #[error("limit must be >= 1, got {0}")]
    InvalidLimit(usize),

    #[error(transparent)]
    Scorer(#[from] scorer::ScorerError),

    #[error(transparent)]
    VectorIndex(#[from] vectorindex::VectorIndexError),

    #[error(transparent)]
    Relational(#[from] relational::RelationalError),

    #[error(transparent)]
    Embed(#[from] embed::EmbedError),
}

impl EngineError {
    /// `true` for errors caused by malformed caller input (`INVALID_ALPHA`,
    /// `INVALID_LIMIT`); `false` for everything else, which the HTTP adapter
    /// should surface as a generic server error per the error-handling
    /// design (`VECTOR_QUERY_FAILED`, `ENRICHMENT_GAP`).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidLimit(_) | EngineError::Scorer(scorer::ScorerError::InvalidAlpha(_))
        )
    }
}
