use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// `GET /Health` — liveness probe, per the fixed response shape in the
/// external interface contract.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "Status": "OK" }))
}
