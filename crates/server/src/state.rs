use std::sync::Arc;

use ticket_search::SearchEngine;

/// Shared application state handed to every route handler.
///
/// `SearchEngine` already wraps its own dependencies in `Arc`s and derives
/// `Clone`, so the only thing this wrapper adds is a stable `axum::State`
/// type independent of the engine's internal shape.
#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<SearchEngine>,
}

impl ServerState {
    pub fn new(engine: SearchEngine) -> Self {
        Self { engine: Arc::new(engine) }
    }
}
