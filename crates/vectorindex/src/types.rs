//! Wire types shared by every [`crate::VectorIndex`] implementation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Embedding dimension carried by every point. Mirrors `embed::EMBEDDING_DIM`;
/// duplicated here rather than depending on the `embed` crate so this crate
/// stays a leaf dependency of the workspace.
pub const VECTOR_DIM: usize = 312;

/// HNSW index parameters, matching Qdrant's collection configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HnswConfig {
    pub m: u64,
    pub ef_construct: u64,
    pub full_scan_threshold: u64,
    pub max_indexing_threads: u64,
    pub on_disk: bool,
}

impl Default for HnswConfig {
    fn default() -> Self {
        Self {
            m: 16,
            ef_construct: 100,
            full_scan_threshold: 10_000,
            max_indexing_threads: 0,
            on_disk: false,
        }
    }
}

/// `ef` used at query time for HNSW search. Fixed per the specification.
pub const QUERY_HNSW_EF: u64 = 512;

/// Hard cap on the number of ANN candidates returned by a single query.
pub const ANN_RESULT_CAP: u64 = 500;

/// Page size used when scrolling the collection during metadata refresh.
pub const SCROLL_PAGE_SIZE: u32 = 1000;

/// Default for [`seed_date_last_record`] when a collection is configured
/// with no `date_from`, or with one that fails to parse.
pub const DEFAULT_SEED_DATE_FROM: &str = "2025-11-14";

/// Seed value for `dateLastRecord` on a collection's very first refresh,
/// parsed from a configured `YYYY-MM-DD` date. Falls back to
/// [`DEFAULT_SEED_DATE_FROM`] if `date_from` doesn't parse.
pub fn seed_date_last_record(date_from: &str) -> DateTime<Utc> {
    parse_seed_date(date_from).unwrap_or_else(|| {
        parse_seed_date(DEFAULT_SEED_DATE_FROM).expect("default seed date is valid")
    })
}

fn parse_seed_date(date_from: &str) -> Option<DateTime<Utc>> {
    let date = chrono::NaiveDate::parse_from_str(date_from, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

/// The payload carried by every point. `registry_date` is stored as a POSIX
/// timestamp (seconds, float) per the wire contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PointPayload {
    pub text: String,
    pub client: String,
    pub product: String,
    pub registry_date: f64,
}

impl PointPayload {
    pub fn registry_date_as_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.registry_date as i64, 0)
    }
}

/// A single indexed ticket: id, vector, and payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub id: i64,
    pub vector: Vec<f32>,
    pub payload: PointPayload,
}

/// One scored hit from a query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredPoint {
    pub id: i64,
    pub score: f32,
    pub payload: PointPayload,
}

/// Whether a query runs approximate (HNSW) or exact (brute-force) search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    Hnsw,
    Exact,
}

/// A single filter value, as accepted from the caller before compilation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FilterValue {
    Str(String),
    Timestamp(f64),
    Date(String),
}

/// Caller-supplied filter mapping, compiled into a backend predicate by
/// [`crate::filter::compile`].
pub type RawFilter = BTreeMap<String, Option<FilterValue>>;

/// In-memory cache of collection-wide facts, recomputed incrementally
/// during ingestion.
#[derive(Debug, Clone, Default)]
pub struct CollectionMetadata {
    pub clients: HashSet<String>,
    pub products: HashSet<String>,
    pub date_last_record: Option<DateTime<Utc>>,
}
