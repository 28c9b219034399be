//! Qdrant-backed [`VectorIndex`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use qdrant_client::qdrant::{
    Condition, CreateCollectionBuilder, Distance, Filter, HnswConfigDiffBuilder, PointStruct,
    Range, ScrollPointsBuilder, SearchParamsBuilder, SearchPointsBuilder, UpsertPointsBuilder,
    VectorParamsBuilder,
};
use qdrant_client::{Payload, Qdrant};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

use crate::error::VectorIndexError;
use crate::filter::CompiledFilter;
use crate::types::{
    seed_date_last_record, CollectionMetadata, HnswConfig, Point, PointPayload, QueryMode,
    ScoredPoint, ANN_RESULT_CAP, QUERY_HNSW_EF, SCROLL_PAGE_SIZE, VECTOR_DIM,
};
use crate::VectorIndex;

/// Settings for connecting to and configuring a Qdrant collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QdrantConfig {
    pub url: String,
    pub collection: String,
    pub hnsw: HnswConfig,
    /// Configured seed for `dateLastRecord` (`YYYY-MM-DD`), used only until
    /// the collection's first successful metadata refresh.
    pub date_from: String,
}

pub struct QdrantVectorIndex {
    client: Qdrant,
    collection: String,
    hnsw: HnswConfig,
    seed_date_from: String,
    metadata: RwLock<CollectionMetadata>,
}

impl QdrantVectorIndex {
    pub fn new(cfg: QdrantConfig) -> Result<Self, VectorIndexError> {
        let client = Qdrant::from_url(&cfg.url)
            .build()
            .map_err(|e| VectorIndexError::UpsertFailed(e.to_string()))?;
        Ok(Self {
            client,
            collection: cfg.collection,
            hnsw: cfg.hnsw,
            seed_date_from: cfg.date_from,
            metadata: RwLock::new(CollectionMetadata::default()),
        })
    }
}

fn compiled_to_qdrant_filter(filter: &CompiledFilter) -> Option<Filter> {
    if filter.is_empty() {
        return None;
    }
    let mut conditions = Vec::new();
    if filter.date_from.is_some() || filter.date_to.is_some() {
        let mut range = Range::default();
        range.gte = filter.date_from;
        range.lte = filter.date_to;
        conditions.push(Condition::range("registry_date", range));
    }
    for (key, value) in &filter.exact {
        conditions.push(Condition::matches(key, value.clone()));
    }
    Some(Filter::all(conditions))
}

fn point_to_struct(point: &Point) -> Result<PointStruct, VectorIndexError> {
    let payload_json = serde_json::to_value(&point.payload)
        .map_err(|e| VectorIndexError::UpsertFailed(e.to_string()))?;
    let payload: Payload = payload_json
        .try_into()
        .map_err(|e: qdrant_client::payload::PayloadError| {
            VectorIndexError::UpsertFailed(e.to_string())
        })?;
    Ok(PointStruct::new(point.id as u64, point.vector.clone(), payload))
}

fn payload_to_point(payload: std::collections::HashMap<String, qdrant_client::qdrant::Value>) -> Option<PointPayload> {
    let value: serde_json::Value = Payload::from(payload).into();
    serde_json::from_value(value).ok()
}

#[async_trait]
impl VectorIndex for QdrantVectorIndex {
    async fn initialize(&self) -> Result<(), VectorIndexError> {
        if self
            .client
            .collection_exists(&self.collection)
            .await
            .map_err(|e| VectorIndexError::UpsertFailed(e.to_string()))?
        {
            self.refresh_metadata().await?;
            return Ok(());
        }
        self.client
            .create_collection(
                CreateCollectionBuilder::new(&self.collection)
                    .vectors_config(VectorParamsBuilder::new(VECTOR_DIM as u64, Distance::Cosine))
                    .hnsw_config(
                        HnswConfigDiffBuilder::default()
                            .m(self.hnsw.m)
                            .ef_construct(self.hnsw.ef_construct)
                            .full_scan_threshold(self.hnsw.full_scan_threshold)
                            .max_indexing_threads(self.hnsw.max_indexing_threads as usize)
                            .on_disk(self.hnsw.on_disk),
                    ),
            )
            .await
            .map_err(|e| VectorIndexError::UpsertFailed(e.to_string()))?;
        Ok(())
    }

    async fn upsert(&self, points: Vec<Point>) -> Result<(), VectorIndexError> {
        let structs = points
            .iter()
            .map(point_to_struct)
            .collect::<Result<Vec<_>, _>>()?;
        self.client
            .upsert_points(UpsertPointsBuilder::new(&self.collection, structs))
            .await
            .map_err(|e| VectorIndexError::UpsertFailed(e.to_string()))?;
        Ok(())
    }

    async fn query(
        &self,
        vector: &[f32],
        limit: usize,
        mode: QueryMode,
        filter: &CompiledFilter,
    ) -> Result<Vec<ScoredPoint>, VectorIndexError> {
        let capped_limit = (limit as u64).min(ANN_RESULT_CAP);
        let mut builder = SearchPointsBuilder::new(&self.collection, vector.to_vec(), capped_limit)
            .with_payload(true);
        if let Some(qfilter) = compiled_to_qdrant_filter(filter) {
            builder = builder.filter(qfilter);
        }
        builder = match mode {
            QueryMode::Exact => builder.params(SearchParamsBuilder::default().exact(true)),
            QueryMode::Hnsw => builder.params(SearchParamsBuilder::default().hnsw_ef(QUERY_HNSW_EF)),
        };

        let results = self
            .client
            .search_points(builder)
            .await
            .map_err(|e| VectorIndexError::QueryFailed(e.to_string()))?;

        Ok(results
            .result
            .into_iter()
            .filter_map(|scored| {
                let payload = payload_to_point(scored.payload)?;
                Some(ScoredPoint {
                    id: scored.id?.point_id_options.and_then(|opt| match opt {
                        qdrant_client::qdrant::point_id::PointIdOptions::Num(n) => Some(n as i64),
                        _ => None,
                    })?,
                    score: scored.score,
                    payload,
                })
            })
            .collect())
    }

    async fn watermark(&self) -> Result<Option<DateTime<Utc>>, VectorIndexError> {
        Ok(self.metadata.read().unwrap().date_last_record)
    }

    fn seed_date(&self) -> DateTime<Utc> {
        seed_date_last_record(&self.seed_date_from)
    }

    async fn refresh_metadata(&self) -> Result<CollectionMetadata, VectorIndexError> {
        let since = self
            .metadata
            .read()
            .unwrap()
            .date_last_record
            .unwrap_or_else(|| self.seed_date());

        let mut meta = self.metadata.read().unwrap().clone();
        let mut offset = None;
        loop {
            let range = Range {
                gte: Some(since.timestamp() as f64),
                ..Default::default()
            };
            let mut builder = ScrollPointsBuilder::new(&self.collection)
                .limit(SCROLL_PAGE_SIZE)
                .filter(Filter::all([Condition::range("registry_date", range)]))
                .with_payload(true);
            if let Some(ref point_id) = offset {
                builder = builder.offset(point_id.clone());
            }

            let page = self
                .client
                .scroll(builder)
                .await
                .map_err(|e| VectorIndexError::QueryFailed(e.to_string()))?;

            for retrieved in &page.result {
                if let Some(parsed) = payload_to_point(retrieved.payload.clone()) {
                    if let Some(registry_date) = parsed.registry_date_as_datetime() {
                        meta.clients.insert(parsed.client.clone());
                        meta.products.insert(parsed.product.clone());
                        meta.date_last_record = Some(match meta.date_last_record {
                            Some(current) if current >= registry_date => current,
                            _ => registry_date,
                        });
                    }
                }
            }

            offset = page.next_page_offset;
            if offset.is_none() {
                break;
            }
        }

        *self.metadata.write().unwrap() = meta.clone();
        Ok(meta)
    }

    async fn metadata(&self) -> CollectionMetadata {
        self.metadata.read().unwrap().clone()
    }
}
