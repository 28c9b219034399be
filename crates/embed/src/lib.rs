//! Embedding generation for the ticket search pipeline.
//!
//! Every backend implements [`Embedder`], producing fixed-dimension,
//! optionally-normalized vectors. This workspace ships one implementation,
//! [`StubEmbedder`]: deterministic, dependency-free, and good enough to run
//! the whole pipeline end to end without a model file on disk. Wiring in a
//! real model is a matter of implementing the same trait.

mod config;
mod error;
mod normalize;
mod stub;
mod types;

pub use config::EmbedConfig;
pub use error::EmbedError;
pub use stub::StubEmbedder;
pub use types::{Embedding, EMBEDDING_DIM};

/// Turns ticket text into a fixed-dimension vector.
pub trait Embedder: Send + Sync {
    fn encode(&self, ticket_number: i64, text: &str) -> Result<Embedding, EmbedError>;

    /// Default implementation encodes sequentially; backends with batched
    /// inference (a real model server) should override this.
    fn encode_batch(&self, items: &[(i64, String)]) -> Result<Vec<Embedding>, EmbedError> {
        items
            .iter()
            .map(|(ticket_number, text)| self.encode(*ticket_number, text))
            .collect()
    }
}
