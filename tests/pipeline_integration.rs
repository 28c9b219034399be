//! Invariants #2-#4 and #7: ranking shape, filter correctness, watermark
//! tracking, and upsert idempotence.

mod common;

use std::sync::Arc;

use ingestor::Ingestor;
use ticket_search::SearchRequest;
use vectorindex::{MockVectorIndex, Point, PointPayload, VectorIndex};

#[tokio::test]
async fn ranked_results_never_exceed_limit_and_are_non_increasing() {
    let date = common::ymd(2025, 4, 1);
    let rows = (1..=5)
        .map(|n| {
            (
                common::ticket(n, "похожая проблема с доступом к системе", "A", "X", date),
                common::enrichment(n),
            )
        })
        .collect();
    let engine = common::seeded_engine(rows, 0.0).await;

    let mut request = SearchRequest::new("похожая проблема с доступом к системе");
    request.exact = true;
    request.limit = 3;

    match engine.search(&request).await.unwrap() {
        ticket_search::SearchOutcome::Results(items) => {
            assert!(items.len() <= 3);
            let scores: Vec<i64> = items
                .iter()
                .map(|i| i.score.trim_end_matches('%').parse().unwrap())
                .collect();
            for pair in scores.windows(2) {
                assert!(pair[0] >= pair[1], "scores must be non-increasing: {scores:?}");
            }
        }
        other => panic!("expected Results, got {other:?}"),
    }
}

#[tokio::test]
async fn watermark_equals_max_registry_date_after_ingestion() {
    let early = common::ymd(2025, 1, 1);
    let late = common::ymd(2025, 6, 1);
    let relational = Arc::new(
        relational::MockRelationalSource::new()
            .with_ticket(common::ticket(1, "проблема один", "A", "X", early))
            .with_ticket(common::ticket(2, "проблема два", "A", "X", late)),
    );
    let vector_index = Arc::new(MockVectorIndex::new());
    let embedder = Arc::new(embed::StubEmbedder::default());
    let ingestor = Ingestor::new(embedder, relational, vector_index.clone());
    ingestor.update().await;

    assert_eq!(vector_index.watermark().await.unwrap(), Some(late));
}

#[tokio::test]
async fn upsert_is_idempotent_by_id() {
    let index = MockVectorIndex::new();
    let point = Point {
        id: 1,
        vector: vec![1.0, 0.0, 0.0],
        payload: PointPayload {
            text: "текст".to_string(),
            client: "A".to_string(),
            product: "X".to_string(),
            registry_date: common::ymd(2025, 1, 1).timestamp() as f64,
        },
    };

    index.upsert(vec![point.clone()]).await.unwrap();
    index.upsert(vec![point]).await.unwrap();

    let hits = index
        .query(
            &[1.0, 0.0, 0.0],
            10,
            vectorindex::QueryMode::Exact,
            &vectorindex::CompiledFilter::default(),
        )
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
}
