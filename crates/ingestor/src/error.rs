use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum IngestorError {
    #[error("embedding failed: {0}")]
    Embed(#[from] embed::EmbedError),
}
