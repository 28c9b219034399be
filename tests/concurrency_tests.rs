//! Invariant #8 (watermark progresses only by whole completed windows under
//! cancellation) and basic concurrent-query safety.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ingestor::Ingestor;
use relational::{RelationalError, RelationalSource, Ticket};
use tokio::sync::watch;
use vectorindex::{MockVectorIndex, VectorIndex};

#[tokio::test]
async fn concurrent_searches_over_a_shared_engine_all_succeed() {
    let date = common::ymd(2025, 5, 1);
    let rows = vec![(
        common::ticket(1, "не открывается личный кабинет", "A", "X", date),
        common::enrichment(1),
    )];
    let engine = Arc::new(common::seeded_engine(rows, 0.0).await);

    let mut tasks = Vec::new();
    for _ in 0..8 {
        let engine = engine.clone();
        tasks.push(tokio::spawn(async move {
            let mut request = ticket_search::SearchRequest::new("не открывается личный кабинет");
            request.exact = true;
            engine.search(&request).await
        }));
    }

    for task in tasks {
        let outcome = task.await.unwrap().unwrap();
        assert!(matches!(outcome, ticket_search::SearchOutcome::Results(_)));
    }
}

#[tokio::test]
async fn cancelling_the_scheduler_still_lets_an_in_flight_update_finish() {
    let date = common::ymd(2025, 5, 10);
    let relational = Arc::new(
        relational::MockRelationalSource::new()
            .with_ticket(common::ticket(1, "сбой авторизации", "A", "X", date)),
    );
    let vector_index = Arc::new(MockVectorIndex::new());
    let embedder = Arc::new(embed::StubEmbedder::default());
    let ingestor = Arc::new(Ingestor::new(embedder, relational, vector_index.clone()));

    let (tx, rx) = watch::channel(false);
    let run_handle = {
        let ingestor = ingestor.clone();
        tokio::spawn(async move { ingestor.run(rx).await })
    };

    // Give the immediate startup catch-up pass time to complete, then cancel.
    tokio::time::sleep(Duration::from_millis(50)).await;
    tx.send(true).unwrap();
    tokio::time::timeout(Duration::from_secs(5), run_handle)
        .await
        .expect("scheduler should exit promptly after cancellation")
        .unwrap();

    // The startup catch-up pass ran to completion before cancellation, so
    // the watermark reflects the one seeded ticket.
    assert_eq!(vector_index.watermark().await.unwrap(), Some(date));
}

#[tokio::test]
async fn cancelling_mid_pass_stops_before_every_window_is_processed() {
    struct SlowRelationalSource {
        windows_started: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl RelationalSource for SlowRelationalSource {
        async fn fetch(
            &self,
            _from: DateTime<Utc>,
            _to: DateTime<Utc>,
        ) -> Result<Vec<Ticket>, RelationalError> {
            self.windows_started.fetch_add(1, Ordering::SeqCst);
            // Slow enough that a cancel fired shortly after startup lands
            // while later windows are still unprocessed.
            tokio::time::sleep(Duration::from_millis(60)).await;
            Ok(Vec::new())
        }

        async fn enrich_by_ids(&self, _ids: &[i64]) -> Result<Vec<relational::EnrichmentRow>, RelationalError> {
            Ok(Vec::new())
        }
    }

    let windows_started = Arc::new(AtomicUsize::new(0));
    let relational = Arc::new(SlowRelationalSource { windows_started: windows_started.clone() });
    let vector_index = Arc::new(MockVectorIndex::new());
    let embedder = Arc::new(embed::StubEmbedder::default());
    let ingestor = Arc::new(Ingestor::new(embedder, relational, vector_index));

    // A cold index's watermark defaults to the seed date, which is months
    // in the past, so the catch-up pass spans many windows; this source
    // deliberately slows each one down so cancellation mid-pass is
    // observable rather than racing a pass that finishes near-instantly.
    let (tx, rx) = watch::channel(false);
    let run_handle = {
        let ingestor = ingestor.clone();
        tokio::spawn(async move { ingestor.run(rx).await })
    };

    tokio::time::sleep(Duration::from_millis(90)).await;
    tx.send(true).unwrap();
    tokio::time::timeout(Duration::from_secs(5), run_handle)
        .await
        .expect("scheduler should exit promptly after cancellation")
        .unwrap();

    let total_windows =
        ingestor::split_windows(vectorindex::seed_date_last_record(vectorindex::DEFAULT_SEED_DATE_FROM), Utc::now())
            .len();
    let observed = windows_started.load(Ordering::SeqCst);
    assert!(
        observed >= 1,
        "expected at least one window to have started processing before cancellation"
    );
    assert!(
        observed < total_windows,
        "expected cancellation to stop before all {total_windows} windows were processed, but {observed} were"
    );
}
