//! Thin HTTP adapter over the ticket search engine.
//!
//! Exposes exactly the four routes named in the external interface
//! contract: `GET /Health`, `GET /find/{q}`, `GET /options`, and
//! `POST /search`. The engine itself — ingestion, scoring, filtering — lives
//! in the root `ticket_search` crate; this crate only binds it to HTTP.
//!
//! # API Endpoints
//!
//! - `GET /Health` - liveness probe, `{"Status":"OK"}`
//! - `GET /find/{q}` - single free-text query with default parameters
//! - `GET /options` - distinct `client`/`product` values in the corpus
//! - `POST /search` - full request: `{query, limit?, alpha?, exact?, filter?}`

pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use server::{build_router, serve};
pub use state::ServerState;
