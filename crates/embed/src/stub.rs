use fxhash::hash64;

use crate::normalize::l2_normalize_in_place;
use crate::types::EMBEDDING_DIM;
use crate::{EmbedConfig, EmbedError, Embedder, Embedding};

/// Deterministic, dependency-free [`Embedder`]. Generates sinusoid values
/// derived from a hash of the input text, guaranteeing reproducible vectors
/// at negligible CPU cost — no model weights, no I/O.
///
/// Used as the default backend and by every test in this workspace. A real
/// model backend is a separate [`Embedder`] implementation; this one never
/// needs to be replaced to run the pipeline end to end.
#[derive(Debug, Clone)]
pub struct StubEmbedder {
    cfg: EmbedConfig,
}

impl StubEmbedder {
    pub fn new(cfg: EmbedConfig) -> Self {
        Self { cfg }
    }
}

impl Default for StubEmbedder {
    fn default() -> Self {
        Self::new(EmbedConfig::default())
    }
}

impl Embedder for StubEmbedder {
    fn encode(&self, ticket_number: i64, text: &str) -> Result<Embedding, EmbedError> {
        Ok(make_stub_embedding(ticket_number, text, &self.cfg))
    }
}

fn make_stub_embedding(ticket_number: i64, text: &str, cfg: &EmbedConfig) -> Embedding {
    let h = hash64(text.as_bytes());
    let mut v = vec![0f32; EMBEDDING_DIM];
    for (idx, value) in v.iter_mut().enumerate() {
        *value = ((h >> (idx % 32)) as f32 * 0.0001).sin();
    }
    if cfg.normalize {
        l2_normalize_in_place(&mut v);
    }
    Embedding {
        ticket_number,
        vector: v,
        model_name: cfg.model_name.clone(),
        normalized: cfg.normalize,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(normalize: bool) -> EmbedConfig {
        EmbedConfig {
            model_name: "stub-test".into(),
            normalize,
        }
    }

    #[test]
    fn fixed_dimension() {
        let e = make_stub_embedding(1, "hello world", &cfg(false));
        assert_eq!(e.vector.len(), EMBEDDING_DIM);
    }

    #[test]
    fn deterministic_for_same_text() {
        let e1 = make_stub_embedding(1, "same text", &cfg(false));
        let e2 = make_stub_embedding(2, "same text", &cfg(false));
        assert_eq!(e1.vector, e2.vector);
    }

    #[test]
    fn different_text_different_vector() {
        let e1 = make_stub_embedding(1, "hello", &cfg(false));
        let e2 = make_stub_embedding(1, "world", &cfg(false));
        assert_ne!(e1.vector, e2.vector);
    }

    #[test]
    fn normalized_has_unit_length() {
        let e = make_stub_embedding(1, "test", &cfg(true));
        let norm: f32 = e.vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-4);
    }

    #[test]
    fn empty_text_still_produces_valid_vector() {
        let e = make_stub_embedding(1, "", &cfg(false));
        assert_eq!(e.vector.len(), EMBEDDING_DIM);
    }

    #[test]
    fn values_in_sin_range() {
        let e = make_stub_embedding(1, "test", &cfg(false));
        assert!(e.vector.iter().all(|&v| (-1.0..=1.0).contains(&v)));
    }

    #[test]
    fn unicode_text_is_handled() {
        let e = make_stub_embedding(1, "Сервер не отвечает 🌍", &cfg(false));
        assert!(!e.vector.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn preserves_model_name() {
        let e = make_stub_embedding(1, "test", &cfg(false));
        assert_eq!(e.model_name, "stub-test");
    }

    #[test]
    fn embedder_trait_encode_batch() {
        let embedder = StubEmbedder::default();
        let items = vec![(1i64, "first".to_string()), (2i64, "second".to_string())];
        let out = embedder.encode_batch(&items).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].ticket_number, 1);
        assert_eq!(out[1].ticket_number, 2);
    }
}
