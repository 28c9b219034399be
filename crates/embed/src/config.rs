use serde::{Deserialize, Serialize};

/// Runtime configuration for embedding generation.
///
/// A real model backend (ONNX, a hosted HTTP endpoint) would read the same
/// shape of configuration; this workspace ships only the deterministic stub,
/// so the only field that matters today is `model_name`, surfaced on every
/// produced [`crate::Embedding`] for observability.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbedConfig {
    /// Friendly label surfaced on every embedding.
    pub model_name: String,
    /// L2-normalize the resulting vector (recommended for cosine similarity).
    pub normalize: bool,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            model_name: "stub-sinusoid-v1".into(),
            normalize: true,
        }
    }
}
