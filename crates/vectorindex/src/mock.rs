//! In-memory, exact-scan [`VectorIndex`] for tests and for driving the
//! engine without a live Qdrant instance.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::RwLock;

use crate::error::VectorIndexError;
use crate::filter::CompiledFilter;
use crate::types::{
    seed_date_last_record, CollectionMetadata, Point, QueryMode, ScoredPoint,
    DEFAULT_SEED_DATE_FROM, SCROLL_PAGE_SIZE,
};
use crate::VectorIndex;

pub struct MockVectorIndex {
    points: RwLock<Vec<Point>>,
    metadata: RwLock<CollectionMetadata>,
    seed_date_from: String,
}

impl Default for MockVectorIndex {
    fn default() -> Self {
        Self {
            points: RwLock::new(Vec::new()),
            metadata: RwLock::new(CollectionMetadata::default()),
            seed_date_from: DEFAULT_SEED_DATE_FROM.to_string(),
        }
    }
}

impl MockVectorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build with a configured seed date, as production wires from
    /// `date_from` rather than relying on [`DEFAULT_SEED_DATE_FROM`].
    pub fn with_seed_date_from(seed_date_from: impl Into<String>) -> Self {
        Self {
            seed_date_from: seed_date_from.into(),
            ..Self::default()
        }
    }
}

fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

#[async_trait]
impl VectorIndex for MockVectorIndex {
    async fn initialize(&self) -> Result<(), VectorIndexError> {
        Ok(())
    }

    async fn upsert(&self, new_points: Vec<Point>) -> Result<(), VectorIndexError> {
        let mut points = self.points.write().unwrap();
        for point in new_points {
            if let Some(existing) = points.iter_mut().find(|p| p.id == point.id) {
                *existing = point;
            } else {
                points.push(point);
            }
        }
        Ok(())
    }

    async fn query(
        &self,
        vector: &[f32],
        limit: usize,
        _mode: QueryMode,
        filter: &CompiledFilter,
    ) -> Result<Vec<ScoredPoint>, VectorIndexError> {
        let points = self.points.read().unwrap();
        let mut scored: Vec<ScoredPoint> = points
            .iter()
            .filter(|p| filter.matches(&p.payload))
            .map(|p| ScoredPoint {
                id: p.id,
                score: cosine(vector, &p.vector),
                payload: p.payload.clone(),
            })
            .collect();
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(limit);
        Ok(scored)
    }

    async fn watermark(&self) -> Result<Option<DateTime<Utc>>, VectorIndexError> {
        let points = self.points.read().unwrap();
        Ok(points
            .iter()
            .filter_map(|p| p.payload.registry_date_as_datetime())
            .max())
    }

    fn seed_date(&self) -> DateTime<Utc> {
        seed_date_last_record(&self.seed_date_from)
    }

    async fn refresh_metadata(&self) -> Result<CollectionMetadata, VectorIndexError> {
        let points = self.points.read().unwrap();
        let since = self
            .metadata
            .read()
            .unwrap()
            .date_last_record
            .unwrap_or_else(|| self.seed_date());

        let mut meta = self.metadata.read().unwrap().clone();
        for page in points.chunks(SCROLL_PAGE_SIZE as usize) {
            for point in page {
                let Some(registry_date) = point.payload.registry_date_as_datetime() else {
                    continue;
                };
                if registry_date < since {
                    continue;
                }
                meta.clients.insert(point.payload.client.clone());
                meta.products.insert(point.payload.product.clone());
                meta.date_last_record = Some(match meta.date_last_record {
                    Some(current) if current >= registry_date => current,
                    _ => registry_date,
                });
            }
        }
        *self.metadata.write().unwrap() = meta.clone();
        Ok(meta)
    }

    async fn metadata(&self) -> CollectionMetadata {
        self.metadata.read().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PointPayload;
    use chrono::TimeZone;

    fn point(id: i64, client: &str, registry_date: f64) -> Point {
        Point {
            id,
            vector: vec![1.0, 0.0, 0.0],
            payload: PointPayload {
                text: "problem text".into(),
                client: client.into(),
                product: "X".into(),
                registry_date,
            },
        }
    }

    #[tokio::test]
    async fn upsert_is_idempotent_by_id() {
        let index = MockVectorIndex::new();
        index.upsert(vec![point(1, "A", 1.0)]).await.unwrap();
        index.upsert(vec![point(1, "B", 2.0)]).await.unwrap();
        let points = index.points.read().unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].payload.client, "B");
    }

    #[tokio::test]
    async fn exact_self_match_scores_one() {
        let index = MockVectorIndex::new();
        index.upsert(vec![point(1, "A", 1.0)]).await.unwrap();
        let hits = index
            .query(&[1.0, 0.0, 0.0], 1, QueryMode::Exact, &CompiledFilter::default())
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert!((hits[0].score - 1.0).abs() < 1e-6);
    }

    #[tokio::test]
    async fn watermark_is_max_registry_date() {
        let index = MockVectorIndex::new();
        let ts_a = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let ts_b = Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap();
        index
            .upsert(vec![
                point(1, "A", ts_a.timestamp() as f64),
                point(2, "B", ts_b.timestamp() as f64),
            ])
            .await
            .unwrap();
        assert_eq!(index.watermark().await.unwrap(), Some(ts_b));
    }

    #[test]
    fn seed_date_reflects_the_configured_date_from() {
        let index = MockVectorIndex::with_seed_date_from("2020-06-15");
        assert_eq!(index.seed_date(), Utc.with_ymd_and_hms(2020, 6, 15, 0, 0, 0).unwrap());
    }

    #[tokio::test]
    async fn refresh_metadata_unions_clients_and_products() {
        let index = MockVectorIndex::new();
        let after_seed = Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap().timestamp() as f64;
        index
            .upsert(vec![point(1, "A", after_seed), point(2, "B", after_seed + 100.0)])
            .await
            .unwrap();
        let meta = index.refresh_metadata().await.unwrap();
        assert!(meta.clients.contains("A"));
        assert!(meta.clients.contains("B"));
        assert!(meta.date_last_record.is_some());
    }
}
