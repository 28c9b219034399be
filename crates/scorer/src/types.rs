/// One cosine hit coming out of the vector index, plus what the scorer
/// needs to compute its lexical counterpart.
#[derive(Debug, Clone, PartialEq)]
pub struct ScorerInput {
    pub id: i64,
    pub cosine: f32,
    pub text: String,
    pub registry_date: f64,
}

/// A hit after hybrid scoring, ready for enrichment.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredHit {
    pub id: i64,
    pub score: f32,
    pub registry_date: f64,
}
