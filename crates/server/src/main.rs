//! Ticket search server binary: loads configuration, wires the concrete
//! `RelationalSource`/`VectorIndex`/`Embedder` implementations, and serves
//! the HTTP adapter alongside the ingestion scheduler.

use std::sync::Arc;

use embed::{EmbedConfig, StubEmbedder};
use relational::{PgRelationalSource, RelationalConfig};
use vectorindex::{QdrantConfig, QdrantVectorIndex, VectorIndex};

use ingestor::Ingestor;
use ticket_search::{AppConfig, SearchEngine};

use server::ServerState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load("config")?;

    tracing_subscriber::fmt()
        .with_env_filter(&config.logging.level)
        .with_target(false)
        .json()
        .init();

    let relational = Arc::new(
        PgRelationalSource::connect(&RelationalConfig {
            url: config.database.relational_db.url.clone(),
        })
        .await?,
    );

    let vector_index = Arc::new(QdrantVectorIndex::new(QdrantConfig {
        url: config.database.vector_db.main.url.clone(),
        collection: config.database.vector_db.main.collection_name.clone(),
        hnsw: (&config.database.vector_db.indexing).into(),
        date_from: config.database.vector_db.main.date_from.clone(),
    })?);
    vector_index.initialize().await?;

    let embedder = Arc::new(StubEmbedder::new(EmbedConfig {
        model_name: config.model.model_name.clone(),
        normalize: true,
    }));

    let engine = SearchEngine::new(
        embedder.clone(),
        relational.clone(),
        vector_index.clone(),
        config.service.threshold,
    );

    let ingestor = Arc::new(Ingestor::new(embedder, relational, vector_index));

    let state = Arc::new(ServerState::new(engine));
    let addr: std::net::SocketAddr = "0.0.0.0:8080".parse()?;

    server::serve(state, ingestor, addr).await
}
