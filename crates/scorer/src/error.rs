use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScorerError {
    #[error("alpha must be in [0, 1], got {0}")]
    InvalidAlpha(f32),
}
