//! Vector index for the ticket search pipeline.
//!
//! [`VectorIndex`] is the contract; [`qdrant::QdrantVectorIndex`] binds it to
//! a live Qdrant collection, and [`mock::MockVectorIndex`] is an in-memory,
//! exact-scan implementation for tests and for driving the engine without a
//! live Qdrant instance.

mod error;
mod filter;
mod mock;
mod qdrant;
mod types;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub use error::VectorIndexError;
pub use filter::{compile as compile_filter, CompiledFilter};
pub use mock::MockVectorIndex;
pub use qdrant::{QdrantConfig, QdrantVectorIndex};
pub use types::{
    seed_date_last_record, CollectionMetadata, FilterValue, HnswConfig, Point, PointPayload,
    QueryMode, RawFilter, ScoredPoint, ANN_RESULT_CAP, DEFAULT_SEED_DATE_FROM, QUERY_HNSW_EF,
    SCROLL_PAGE_SIZE, VECTOR_DIM,
};

/// A persisted collection of ticket vectors, queryable by similarity under
/// an optional filter.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Create the backing collection if it does not already exist.
    async fn initialize(&self) -> Result<(), VectorIndexError>;

    /// Insert or overwrite points by id.
    async fn upsert(&self, points: Vec<Point>) -> Result<(), VectorIndexError>;

    /// Return up to `limit` points nearest to `vector`, matching `filter`.
    async fn query(
        &self,
        vector: &[f32],
        limit: usize,
        mode: QueryMode,
        filter: &CompiledFilter,
    ) -> Result<Vec<ScoredPoint>, VectorIndexError>;

    /// `max(registry_date)` over all points, or `None` for an empty collection.
    async fn watermark(&self) -> Result<Option<DateTime<Utc>>, VectorIndexError>;

    /// The configured seed for `dateLastRecord`/watermark fallback, used
    /// when this collection has no prior watermark at all. Set at
    /// construction from `date_from`.
    fn seed_date(&self) -> DateTime<Utc>;

    /// Incrementally scroll the collection and fold new points into the
    /// cached [`CollectionMetadata`], returning the updated snapshot.
    async fn refresh_metadata(&self) -> Result<CollectionMetadata, VectorIndexError>;

    /// The last snapshot produced by [`Self::refresh_metadata`].
    async fn metadata(&self) -> CollectionMetadata;
}
