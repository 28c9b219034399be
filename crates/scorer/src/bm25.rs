//! A hand-rolled BM25-Okapi index. No published BM25 crate fit this
//! workspace's tokenization contract, so the scorer builds its own — the
//! classic Robertson/Sparck Jones formula with the conventional k1/b
//! defaults.

use std::collections::HashMap;

const K1: f32 = 1.5;
const B: f32 = 0.75;

pub struct Bm25Index {
    doc_term_freqs: Vec<HashMap<String, u32>>,
    doc_lens: Vec<usize>,
    avg_doc_len: f32,
    doc_freq: HashMap<String, u32>,
    doc_count: usize,
}

impl Bm25Index {
    /// Build an index over `docs`, one BM25-tokenized document per hit, in
    /// the caller's hit order — that order is preserved in [`Self::score`].
    pub fn new(docs: &[Vec<String>]) -> Self {
        let doc_count = docs.len();
        let mut doc_term_freqs = Vec::with_capacity(doc_count);
        let mut doc_lens = Vec::with_capacity(doc_count);
        let mut doc_freq: HashMap<String, u32> = HashMap::new();

        for doc in docs {
            let mut term_freqs: HashMap<String, u32> = HashMap::new();
            for term in doc {
                *term_freqs.entry(term.clone()).or_insert(0) += 1;
            }
            for term in term_freqs.keys() {
                *doc_freq.entry(term.clone()).or_insert(0) += 1;
            }
            doc_lens.push(doc.len());
            doc_term_freqs.push(term_freqs);
        }

        let avg_doc_len = if doc_count == 0 {
            0.0
        } else {
            doc_lens.iter().sum::<usize>() as f32 / doc_count as f32
        };

        Self {
            doc_term_freqs,
            doc_lens,
            avg_doc_len,
            doc_freq,
            doc_count,
        }
    }

    /// BM25 score for `query` against every document, in the original
    /// document order.
    pub fn score(&self, query: &[String]) -> Vec<f32> {
        (0..self.doc_count)
            .map(|doc_idx| self.score_one(doc_idx, query))
            .collect()
    }

    fn score_one(&self, doc_idx: usize, query: &[String]) -> f32 {
        let doc_len = self.doc_lens[doc_idx] as f32;
        let term_freqs = &self.doc_term_freqs[doc_idx];

        query
            .iter()
            .map(|term| {
                let Some(&f) = term_freqs.get(term) else {
                    return 0.0;
                };
                let f = f as f32;
                let n = *self.doc_freq.get(term).unwrap_or(&0) as f32;
                let idf = (((self.doc_count as f32 - n + 0.5) / (n + 0.5)) + 1.0).ln();
                let denom = f + K1 * (1.0 - B + B * doc_len / self.avg_doc_len.max(1.0));
                idf * (f * (K1 + 1.0)) / denom.max(f32::EPSILON)
            })
            .sum()
    }
}
