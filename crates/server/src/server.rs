//! Axum router and server startup: the four named routes over the
//! `SearchEngine` façade, plus the background ingestion task.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::sync::watch;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::routes::{health, not_found, search};
use crate::state::ServerState;

/// Build the router: the four routes the external interface contract
/// names, with permissive CORS as required by `spec.md` §6.
pub fn build_router(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/Health", get(health::health_check))
        .route("/find/{q}", get(search::find))
        .route("/options", get(search::options))
        .route("/search", post(search::search))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the router to completion, alongside the ingestion scheduler, until
/// Ctrl+C or SIGTERM. Both tasks observe the same cancellation signal so a
/// shutdown drains the in-flight ingestion window before exiting, per the
/// cooperative-cancellation model.
pub async fn serve(
    state: Arc<ServerState>,
    ingestor: Arc<ingestor::Ingestor>,
    addr: std::net::SocketAddr,
) -> anyhow::Result<()> {
    let (cancel_tx, cancel_rx) = watch::channel(false);
    let ingestor_task = tokio::spawn(async move { ingestor.run(cancel_rx).await });

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "starting search server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let _ = cancel_tx.send(true);
    let _ = ingestor_task.await;
    tracing::info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
