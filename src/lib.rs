//! Hybrid semantic + lexical search engine over a corpus of support-ticket
//! records: ingests tickets from a relational store, computes dense
//! embeddings plus a normalized lexical representation, persists both into
//! a vector index, and answers ranked similarity queries that blend cosine
//! similarity with a BM25 score under a caller-controlled mix parameter.
//!
//! [`SearchEngine`] is the public façade: it composes the text pipeline,
//! embedder, vector index, hybrid scorer, and relational source behind a
//! single `search`/`metadata` surface. The HTTP adapter, the embedding
//! model's internals, and the concrete relational/vector backends are
//! external collaborators wired in by the caller — this crate only fixes
//! their contracts.
//!
//! ```ignore
//! use std::sync::Arc;
//! use ticket_search::{SearchEngine, SearchOutcome, SearchRequest};
//!
//! # async fn demo(engine: SearchEngine) -> Result<(), ticket_search::EngineError> {
//! let request = SearchRequest::new("Сервер не отвечает");
//! match engine.search(&request).await? {
//!     SearchOutcome::Results(items) => println!("{} hits", items.len()),
//!     SearchOutcome::DataNotFound { .. } => println!("nothing indexed yet"),
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod types;

pub use config::{
    AppConfig, ConfigError, DatabaseConfig, LoggingConfig, ModelConfig, RelationalDbConfig,
    ServiceConfig, VectorDbConfig, VectorIndexingConfig, VectorMainConfig,
};
pub use error::EngineError;
pub use types::{SearchFilter, SearchOutcome, SearchRequest, SearchResultItem};

use std::sync::Arc;

use chrono::DateTime;
use embed::Embedder;
use relational::RelationalSource;
use scorer::ScorerInput;
use vectorindex::{QueryMode, VectorIndex, ANN_RESULT_CAP};

const QUERY_EMBEDDING_PLACEHOLDER_ID: i64 = 0;

/// Composes C1–C5 of the pipeline behind a single façade. Holds no state
/// other than `Arc`'d references to its collaborators and the configured
/// suppression threshold, matching the teacher's `Arc`-everything
/// `ServerState` pattern so the engine is cheap to clone across request
/// tasks.
#[derive(Clone)]
pub struct SearchEngine {
    embedder: Arc<dyn Embedder>,
    relational: Arc<dyn RelationalSource>,
    vector_index: Arc<dyn VectorIndex>,
    threshold: f32,
}

impl SearchEngine {
    pub fn new(
        embedder: Arc<dyn Embedder>,
        relational: Arc<dyn RelationalSource>,
        vector_index: Arc<dyn VectorIndex>,
        threshold: f32,
    ) -> Self {
        Self {
            embedder,
            relational,
            vector_index,
            threshold,
        }
    }

    /// Run a search end to end: tokenize/embed the query, pull candidate
    /// hits from the vector index, blend BM25 and cosine under `alpha`,
    /// and enrich the top results from the relational source.
    ///
    /// A vector index with no points matching `request.filter` at all
    /// yields [`SearchOutcome::DataNotFound`] — this is the `EMPTY_CORPUS`
    /// signal, distinct from a non-empty hit set that `threshold`
    /// suppresses down to a valid, merely empty, result list.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchOutcome, EngineError> {
        if request.limit == 0 {
            return Err(EngineError::InvalidLimit(request.limit));
        }

        let bert_text = textproc::to_bert_text(&request.query);
        let embedding = self
            .embedder
            .encode(QUERY_EMBEDDING_PLACEHOLDER_ID, &bert_text)?;

        let mode = if request.exact {
            QueryMode::Exact
        } else {
            QueryMode::Hnsw
        };
        let query_limit = if request.exact {
            usize::MAX
        } else {
            ANN_RESULT_CAP as usize
        };
        let compiled_filter = vectorindex::compile_filter(&request.filter.to_raw_filter())?;

        let hits = self
            .vector_index
            .query(&embedding.vector, query_limit, mode, &compiled_filter)
            .await?;

        if hits.is_empty() {
            return Ok(SearchOutcome::data_not_found());
        }

        let scorer_inputs: Vec<ScorerInput> = hits
            .iter()
            .map(|hit| ScorerInput {
                id: hit.id,
                cosine: hit.score,
                text: hit.payload.text.clone(),
                registry_date: hit.payload.registry_date,
            })
            .collect();

        let ranked = scorer::hybrid_score(&scorer_inputs, &request.query, request.alpha)?;
        let top: Vec<_> = ranked.into_iter().take(request.limit).collect();

        let ids: Vec<i64> = top.iter().map(|hit| hit.id).collect();
        let enrichment = self.relational.enrich_by_ids(&ids).await?;

        let mut items = Vec::with_capacity(top.len());
        for (hit, enrich) in top.iter().zip(enrichment.iter()) {
            if hit.score < self.threshold {
                continue;
            }
            items.push(SearchResultItem {
                id: hit.id.to_string(),
                score: format!("{}%", (hit.score * 100.0).round() as i64),
                responsible: enrich.fio.clone(),
                priority: enrich.admission_prority.clone(),
                registry_date: DateTime::from_timestamp(hit.registry_date as i64, 0)
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default(),
                url: format!(
                    "https://support.naumen.ru/sd/operator/#uuid:{}",
                    enrich.servicecall
                ),
            });
        }

        Ok(SearchOutcome::Results(items))
    }

    /// Pass-through to the vector index's cached collection metadata.
    pub async fn metadata(&self) -> vectorindex::CollectionMetadata {
        self.vector_index.metadata().await
    }
}
