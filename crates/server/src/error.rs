use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server-layer error wrapping the engine's own error type. Every downstream
/// crate's error already lives in [`ticket_search::EngineError`]; this adds
/// only the HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Engine(#[from] ticket_search::EngineError),

    #[error("invalid request body: {0}")]
    BadRequest(String),

    #[error("not found")]
    NotFound,
}

impl ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Engine(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            ServerError::Engine(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();
        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}
