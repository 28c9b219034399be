//! The ingestion scheduler: a single task holding references to the four
//! components it composes, run once at startup for catch-up and then once a
//! day at local 03:00 thereafter.

use std::sync::Arc;

use chrono::{DateTime, Duration as ChronoDuration, Local, NaiveTime, TimeZone, Utc};
use embed::Embedder;
use relational::RelationalSource;
use tokio::sync::watch;
use vectorindex::{Point, PointPayload, VectorIndex};

use crate::window::split_windows;

/// Holds no state beyond references to its four collaborators, per the
/// specification — the watermark itself lives in the vector index.
pub struct Ingestor {
    embedder: Arc<dyn Embedder>,
    relational: Arc<dyn RelationalSource>,
    vector_index: Arc<dyn VectorIndex>,
}

impl Ingestor {
    pub fn new(
        embedder: Arc<dyn Embedder>,
        relational: Arc<dyn RelationalSource>,
        vector_index: Arc<dyn VectorIndex>,
    ) -> Self {
        Self {
            embedder,
            relational,
            vector_index,
        }
    }

    /// Run one ingestion pass: read the watermark, split the remaining time
    /// up to now into bounded windows, and process each in order. A window
    /// whose fetch fails is logged and skipped; ingestion proceeds to the
    /// next window. No external cancellation is observed — equivalent to
    /// [`Self::update_cancellable`] with a `watch` channel that never fires.
    ///
    /// A collection with no prior watermark starts from the same seed date
    /// the vector index uses for its own first metadata refresh, rather
    /// than the Unix epoch, so a cold index doesn't walk decades of empty
    /// windows.
    pub async fn update(&self) {
        let (_tx, rx) = watch::channel(false);
        self.update_cancellable(&rx).await;
    }

    /// Same as [`Self::update`], but exits between windows as soon as
    /// `cancel` carries `true`, leaving any remaining windows for the next
    /// pass (the watermark is re-derived from the store, so nothing is
    /// lost).
    async fn update_cancellable(&self, cancel: &watch::Receiver<bool>) {
        let now = Utc::now();
        let from = self
            .vector_index
            .watermark()
            .await
            .ok()
            .flatten()
            .unwrap_or_else(|| self.vector_index.seed_date());

        for (window_from, window_to) in split_windows(from, now) {
            if *cancel.borrow() {
                tracing::info!("ingestor cancelled mid-pass, stopping before next window");
                return;
            }
            self.process_window(window_from, window_to).await;
        }
    }

    async fn process_window(&self, from: DateTime<Utc>, to: DateTime<Utc>) {
        let tickets = match self.relational.fetch(from, to).await {
            Ok(tickets) => tickets,
            Err(err) => {
                tracing::warn!(error = %err, %from, %to, "window fetch failed, skipping");
                return;
            }
        };
        if tickets.is_empty() {
            return;
        }

        let mut points = Vec::with_capacity(tickets.len());
        for ticket in &tickets {
            let bert_text = textproc::to_bert_text(&ticket.problem);
            let embedding = match self.embedder.encode(ticket.number, &bert_text) {
                Ok(embedding) => embedding,
                Err(err) => {
                    tracing::warn!(error = %err, ticket = ticket.number, "embedding failed, skipping ticket");
                    continue;
                }
            };
            points.push(Point {
                id: ticket.number,
                vector: embedding.vector,
                payload: PointPayload {
                    text: ticket.problem.clone(),
                    client: ticket.client.clone(),
                    product: ticket.product.clone(),
                    registry_date: ticket.registry_date.timestamp() as f64,
                },
            });
        }

        if points.is_empty() {
            return;
        }

        if let Err(err) = self.vector_index.upsert(points).await {
            tracing::warn!(error = %err, %from, %to, "window upsert failed, leaving watermark unchanged");
            return;
        }

        if let Err(err) = self.vector_index.refresh_metadata().await {
            tracing::warn!(error = %err, %from, %to, "metadata refresh failed");
        }
    }

    /// Run immediate catch-up, then loop forever sleeping until the next
    /// local 03:00 and running another pass, until `cancel` fires. `cancel`
    /// is threaded into every pass so a cancellation during a long catch-up
    /// (many windows) takes effect between windows rather than only between
    /// scheduled runs.
    pub async fn run(&self, mut cancel: watch::Receiver<bool>) {
        self.update_cancellable(&cancel).await;
        if *cancel.borrow() {
            return;
        }

        loop {
            let sleep_for = duration_until_next_3am();
            tokio::select! {
                _ = tokio::time::sleep(sleep_for) => {
                    self.update_cancellable(&cancel).await;
                    if *cancel.borrow() {
                        return;
                    }
                }
                _ = cancel.changed() => {
                    if *cancel.borrow() {
                        tracing::info!("ingestor received cancellation, stopping");
                        return;
                    }
                }
            }
        }
    }
}

fn duration_until_next_3am() -> std::time::Duration {
    let now = Local::now();
    let three_am = NaiveTime::from_hms_opt(3, 0, 0).expect("3:00:00 is a valid time");
    let mut next = now.date_naive().and_time(three_am);
    let next_local = Local.from_local_datetime(&next).single().unwrap_or(now);
    let next_local = if next_local <= now {
        next = next + ChronoDuration::days(1);
        Local.from_local_datetime(&next).single().unwrap_or(now + ChronoDuration::days(1))
    } else {
        next_local
    };
    (next_local - now).to_std().unwrap_or(std::time::Duration::from_secs(60))
}
