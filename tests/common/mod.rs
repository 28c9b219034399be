//! Shared fixtures for the crate's integration tests: a fully in-memory
//! stack (stub embedder, mock relational source, in-memory vector index)
//! wired together exactly as production wires the real backends, ingested
//! through the same `Ingestor` the production binary runs.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use embed::StubEmbedder;
use ingestor::Ingestor;
use relational::{EnrichmentRow, MockRelationalSource, Ticket};
use uuid::Uuid;
use vectorindex::MockVectorIndex;

use ticket_search::SearchEngine;

pub fn ymd(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

pub fn ticket(number: i64, problem: &str, client: &str, product: &str, date: DateTime<Utc>) -> Ticket {
    Ticket {
        number,
        problem: problem.to_string(),
        client: client.to_string(),
        product: product.to_string(),
        registry_date: date,
    }
}

pub fn enrichment(number: i64) -> EnrichmentRow {
    EnrichmentRow {
        number,
        fio: format!("Responsible #{number}"),
        admission_prority: "normal".to_string(),
        servicecall: Uuid::from_u128(number as u128),
    }
}

/// Build an engine fed by a single `Ingestor::update()` pass over the given
/// tickets, so tests exercise the real ingest path rather than poking the
/// vector index directly.
pub async fn seeded_engine(rows: Vec<(Ticket, EnrichmentRow)>, threshold: f32) -> SearchEngine {
    let mut relational = MockRelationalSource::new();
    for (ticket, enrichment) in rows {
        relational = relational.with_ticket(ticket).with_enrichment(enrichment);
    }
    let relational = Arc::new(relational);
    let vector_index = Arc::new(MockVectorIndex::new());
    let embedder = Arc::new(StubEmbedder::default());

    let ingestor = Ingestor::new(embedder.clone(), relational.clone(), vector_index.clone());
    ingestor.update().await;

    SearchEngine::new(embedder, relational, vector_index, threshold)
}
