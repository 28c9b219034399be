//! Relational source binding for the ticket search pipeline.
//!
//! Windowed fetch of tickets by registry date, and order-preserving
//! enrichment lookup by ticket id list. Ships a real Postgres binding
//! ([`PgRelationalSource`]) and an in-memory mock ([`MockRelationalSource`])
//! for tests and for driving the engine without a live database.

mod config;
mod error;
mod source;
mod types;

pub use config::RelationalConfig;
pub use error::RelationalError;
pub use source::{MockRelationalSource, PgRelationalSource, RelationalSource};
pub use types::{EnrichmentRow, Ticket};
