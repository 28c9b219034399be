//! Scheduled windowed ingestion from the relational source into the vector
//! index: reads the current watermark, splits the remaining time into
//! bounded windows, and re-embeds and upserts each window's tickets.

mod error;
mod scheduler;
mod window;

pub use error::IngestorError;
pub use scheduler::Ingestor;
pub use window::{split_windows, WINDOW_SECS};
