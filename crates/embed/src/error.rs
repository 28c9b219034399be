use thiserror::Error;

/// Errors surfaced by an [`crate::Embedder`] implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmbedError {
    /// Configuration is inconsistent (e.g. an empty model name).
    #[error("invalid embed config: {0}")]
    InvalidConfig(String),
    /// Inference failed for a reason specific to the backend.
    #[error("inference failure: {0}")]
    Inference(String),
}
