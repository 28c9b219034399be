//! Error types produced by the `relational` crate.

use thiserror::Error;

/// Errors that can occur fetching or enriching ticket rows.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RelationalError {
    /// The fetch query against the relational store failed. Ingestion logs
    /// this and skips the affected window; it is never fatal to the
    /// scheduler.
    #[error("relational fetch failed: {0}")]
    FetchFailed(#[source] sqlx::Error),

    /// `enrichByIds` was called with at least one id that has no matching
    /// row. The caller asked for a positional zip with the score list; a
    /// gap here means that guarantee cannot be honored.
    #[error("enrichment gap: missing row for ticket number {0}")]
    EnrichmentGap(i64),
}
