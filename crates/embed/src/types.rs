use serde::{Deserialize, Serialize};

/// Fixed embedding dimension for this pipeline. Every [`Embedding`] produced
/// or consumed anywhere in the workspace has exactly this many components.
pub const EMBEDDING_DIM: usize = 312;

/// A single embedding vector plus the bookkeeping callers need to trust it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// Ticket number the vector was derived from.
    pub ticket_number: i64,
    /// The embedding itself, always [`EMBEDDING_DIM`] components long.
    pub vector: Vec<f32>,
    /// Name of the model that produced the vector.
    pub model_name: String,
    /// Whether `vector` has been L2-normalized.
    pub normalized: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedding_creation() {
        let embedding = Embedding {
            ticket_number: 42,
            vector: vec![0.1; EMBEDDING_DIM],
            model_name: "stub".into(),
            normalized: true,
        };
        assert_eq!(embedding.ticket_number, 42);
        assert_eq!(embedding.vector.len(), EMBEDDING_DIM);
    }

    #[test]
    fn embedding_serde_roundtrip() {
        let embedding = Embedding {
            ticket_number: 7,
            vector: vec![0.2; EMBEDDING_DIM],
            model_name: "stub".into(),
            normalized: true,
        };
        let serialized = serde_json::to_string(&embedding).unwrap();
        let deserialized: Embedding = serde_json::from_str(&serialized).unwrap();
        assert_eq!(embedding, deserialized);
    }

    #[test]
    fn embedding_partial_eq() {
        let e1 = Embedding {
            ticket_number: 1,
            vector: vec![0.1; EMBEDDING_DIM],
            model_name: "stub".into(),
            normalized: false,
        };
        let e2 = e1.clone();
        let e3 = Embedding {
            ticket_number: 2,
            ..e1.clone()
        };
        assert_eq!(e1, e2);
        assert_ne!(e1, e3);
    }
}
