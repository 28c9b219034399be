//! Wire-facing request/response types for the search engine façade. These
//! cross the HTTP boundary even though the adapter itself is out of core,
//! so they carry `serde` derives.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use vectorindex::{FilterValue, RawFilter};

fn default_limit() -> usize {
    5
}

fn default_alpha() -> f32 {
    0.5
}

/// Caller-supplied filter. Every field is optional; an absent field is
/// never compiled into a predicate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchFilter {
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub date_from: Option<String>,
    #[serde(default)]
    pub date_to: Option<String>,
}

impl SearchFilter {
    /// Lower into the raw filter map the vector index's filter compiler
    /// consumes. `date_from`/`date_to` are passed through as `YYYY-MM-DD`
    /// strings; `compile_filter` accepts either that or a POSIX timestamp.
    pub fn to_raw_filter(&self) -> RawFilter {
        let mut map: RawFilter = BTreeMap::new();
        if let Some(client) = &self.client {
            map.insert("client".to_string(), Some(FilterValue::Str(client.clone())));
        }
        if let Some(product) = &self.product {
            map.insert("product".to_string(), Some(FilterValue::Str(product.clone())));
        }
        if let Some(date_from) = &self.date_from {
            map.insert("date_from".to_string(), Some(FilterValue::Date(date_from.clone())));
        }
        if let Some(date_to) = &self.date_to {
            map.insert("date_to".to_string(), Some(FilterValue::Date(date_to.clone())));
        }
        map
    }
}

/// A search request as it crosses the HTTP boundary (`POST /search`), with
/// the specification's defaults applied via `serde(default)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default = "default_alpha")]
    pub alpha: f32,
    #[serde(default)]
    pub exact: bool,
    #[serde(default)]
    pub filter: SearchFilter,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: default_limit(),
            alpha: default_alpha(),
            exact: false,
            filter: SearchFilter::default(),
        }
    }
}

/// One enriched, ranked hit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResultItem {
    pub id: String,
    pub score: String,
    pub responsible: String,
    pub priority: String,
    pub registry_date: String,
    pub url: String,
}

/// Outcome of a search. A collection with no matching points at all is
/// distinguished from a search that matched points but filtered every one
/// of them out below `threshold` — the latter is a normal, empty `Results`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SearchOutcome {
    Results(Vec<SearchResultItem>),
    DataNotFound { result: String },
}

impl SearchOutcome {
    pub fn data_not_found() -> Self {
        SearchOutcome::DataNotFound {
            result: "data not found".to_string(),
        }
    }
}
