//! HTTP endpoint handlers. One module per concern: `health` for the
//! liveness probe, `search` for the three engine-facing routes.

pub mod health;
pub mod search;

use crate::error::ServerError;

/// Fallback for any path not matched by the four named routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
