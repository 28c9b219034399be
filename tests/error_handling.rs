//! Error-handling design: client errors (`INVALID_ALPHA`, `INVALID_LIMIT`)
//! versus failures that are logged and absorbed at a lower layer
//! (`RELATIONAL_FETCH_FAILED`, `ENRICHMENT_GAP`).

mod common;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ingestor::Ingestor;
use relational::{EnrichmentRow, RelationalError, RelationalSource, Ticket};
use std::sync::Arc;
use vectorindex::{MockVectorIndex, VectorIndex};

#[tokio::test]
async fn invalid_limit_is_a_client_error() {
    let engine = common::seeded_engine(vec![], 0.0).await;
    let mut request = ticket_search::SearchRequest::new("что угодно");
    request.limit = 0;
    let err = engine.search(&request).await.unwrap_err();
    assert!(err.is_client_error());
}

#[tokio::test]
async fn invalid_alpha_is_a_client_error() {
    let date = common::ymd(2025, 2, 2);
    let rows = vec![(
        common::ticket(1, "проблема с доступом", "A", "X", date),
        common::enrichment(1),
    )];
    let engine = common::seeded_engine(rows, 0.0).await;

    let mut request = ticket_search::SearchRequest::new("проблема с доступом");
    request.alpha = 2.0;
    let err = engine.search(&request).await.unwrap_err();
    assert!(err.is_client_error());
}

struct AlwaysFailsRelationalSource;

#[async_trait]
impl RelationalSource for AlwaysFailsRelationalSource {
    async fn fetch(&self, _from: DateTime<Utc>, _to: DateTime<Utc>) -> Result<Vec<Ticket>, RelationalError> {
        Err(RelationalError::EnrichmentGap(-1))
    }

    async fn enrich_by_ids(&self, _ids: &[i64]) -> Result<Vec<EnrichmentRow>, RelationalError> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn a_window_whose_fetch_fails_does_not_abort_the_ingestion_pass() {
    let relational = Arc::new(AlwaysFailsRelationalSource);
    let vector_index = Arc::new(MockVectorIndex::new());
    let embedder = Arc::new(embed::StubEmbedder::default());

    let ingestor = Ingestor::new(embedder, relational, vector_index.clone());
    // Every window's fetch fails; update() must still return rather than
    // panicking or propagating the error.
    ingestor.update().await;

    let meta = vector_index.metadata().await;
    assert!(meta.clients.is_empty());
}
