//! Core data model for the relational source.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A ticket row as produced by the upstream relational store.
///
/// `number` is unique across the corpus; `registry_date` is never null.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ticket {
    pub number: i64,
    pub problem: String,
    pub client: String,
    pub product: String,
    pub registry_date: DateTime<Utc>,
}

/// Out-of-band enrichment looked up per ticket number at query time; never
/// cached, since it can change independently of the ticket's indexed
/// content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnrichmentRow {
    pub number: i64,
    pub fio: String,
    pub admission_prority: String,
    pub servicecall: Uuid,
}
