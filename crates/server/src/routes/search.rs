use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use ticket_search::{SearchOutcome, SearchRequest};

use crate::error::ServerResult;
use crate::state::ServerState;

fn into_json(outcome: SearchOutcome) -> impl IntoResponse {
    Json(outcome)
}

/// `GET /find/{q}` — a single free-text query with every other parameter at
/// its default.
pub async fn find(
    State(state): State<Arc<ServerState>>,
    Path(q): Path<String>,
) -> ServerResult<impl IntoResponse> {
    let request = SearchRequest::new(q);
    let outcome = state.engine.search(&request).await?;
    Ok(into_json(outcome))
}

/// `GET /options` — the set of distinct client/product values currently in
/// the corpus, a pass-through to `VectorIndex` metadata.
pub async fn options(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let metadata = state.engine.metadata().await;
    let mut clients: Vec<&String> = metadata.clients.iter().collect();
    let mut products: Vec<&String> = metadata.products.iter().collect();
    clients.sort();
    products.sort();
    Json(json!({ "clients": clients, "products": products }))
}

/// `POST /search` — the full request shape with optional limit, alpha,
/// exact mode, and filter.
pub async fn search(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<SearchRequest>,
) -> ServerResult<impl IntoResponse> {
    let outcome = state.engine.search(&request).await?;
    Ok(into_json(outcome))
}
