//! Error types produced by the `vectorindex` crate.

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum VectorIndexError {
    #[error("vector upsert failed: {0}")]
    UpsertFailed(String),

    #[error("vector query failed: {0}")]
    QueryFailed(String),

    #[error("invalid filter value for key {key}: {reason}")]
    InvalidFilter { key: String, reason: String },
}
