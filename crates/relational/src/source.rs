//! The [`RelationalSource`] contract and its two implementations: a real
//! Postgres binding and an in-memory mock for tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{postgres::PgPoolOptions, PgPool, Row};
use std::collections::HashMap;
use std::sync::RwLock;

use crate::config::RelationalConfig;
use crate::error::RelationalError;
use crate::types::{EnrichmentRow, Ticket};

const FETCH_TICKETS_SQL: &str = r#"
    SELECT number, problem, client, product, registry_date
    FROM tickets
    WHERE registry_date >= $1 AND registry_date <= $2
"#;

/// Ordering matters here: the specification requires `enrichByIds` to
/// return rows in the same order the caller supplied ids in, because the
/// result is zipped positionally with a score list. `array_position` pins
/// that ordering on the SQL side rather than relying on a client-side sort.
const ENRICH_BY_IDS_SQL: &str = r#"
    SELECT number, fio, admission_prority, servicecall
    FROM ticket_enrichment
    WHERE number = ANY($1)
    ORDER BY array_position($1::bigint[], number)
"#;

/// Windowed fetch of tickets by date range, and lookup of enrichment rows
/// by ticket id list, order-preserving.
#[async_trait]
pub trait RelationalSource: Send + Sync {
    async fn fetch(
        &self,
        from_date: DateTime<Utc>,
        to_date: DateTime<Utc>,
    ) -> Result<Vec<Ticket>, RelationalError>;

    async fn enrich_by_ids(&self, ids: &[i64]) -> Result<Vec<EnrichmentRow>, RelationalError>;
}

/// Postgres-backed [`RelationalSource`].
pub struct PgRelationalSource {
    pool: PgPool,
}

impl PgRelationalSource {
    pub async fn connect(cfg: &RelationalConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new().connect(&cfg.url).await?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl RelationalSource for PgRelationalSource {
    async fn fetch(
        &self,
        from_date: DateTime<Utc>,
        to_date: DateTime<Utc>,
    ) -> Result<Vec<Ticket>, RelationalError> {
        let rows = sqlx::query(FETCH_TICKETS_SQL)
            .bind(from_date)
            .bind(to_date)
            .fetch_all(&self.pool)
            .await
            .map_err(RelationalError::FetchFailed)?;

        Ok(rows
            .into_iter()
            .map(|row| Ticket {
                number: row.get("number"),
                problem: row.get("problem"),
                client: row.get("client"),
                product: row.get("product"),
                registry_date: row.get("registry_date"),
            })
            .collect())
    }

    async fn enrich_by_ids(&self, ids: &[i64]) -> Result<Vec<EnrichmentRow>, RelationalError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = sqlx::query(ENRICH_BY_IDS_SQL)
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(RelationalError::FetchFailed)?;

        if rows.len() != ids.len() {
            let found: std::collections::HashSet<i64> =
                rows.iter().map(|r| r.get::<i64, _>("number")).collect();
            let missing = ids
                .iter()
                .find(|id| !found.contains(id))
                .copied()
                .expect("row count mismatch implies at least one missing id");
            return Err(RelationalError::EnrichmentGap(missing));
        }

        Ok(rows
            .into_iter()
            .map(|row| EnrichmentRow {
                number: row.get("number"),
                fio: row.get("fio"),
                admission_prority: row.get("admission_prority"),
                servicecall: row.get("servicecall"),
            })
            .collect())
    }
}

/// In-memory [`RelationalSource`] for tests and for driving the engine
/// without a live database.
#[derive(Default)]
pub struct MockRelationalSource {
    tickets: RwLock<Vec<Ticket>>,
    enrichment: RwLock<HashMap<i64, EnrichmentRow>>,
}

impl MockRelationalSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ticket(self, ticket: Ticket) -> Self {
        self.tickets.write().unwrap().push(ticket);
        self
    }

    pub fn with_enrichment(self, row: EnrichmentRow) -> Self {
        self.enrichment.write().unwrap().insert(row.number, row);
        self
    }
}

#[async_trait]
impl RelationalSource for MockRelationalSource {
    async fn fetch(
        &self,
        from_date: DateTime<Utc>,
        to_date: DateTime<Utc>,
    ) -> Result<Vec<Ticket>, RelationalError> {
        Ok(self
            .tickets
            .read()
            .unwrap()
            .iter()
            .filter(|t| t.registry_date >= from_date && t.registry_date <= to_date)
            .cloned()
            .collect())
    }

    async fn enrich_by_ids(&self, ids: &[i64]) -> Result<Vec<EnrichmentRow>, RelationalError> {
        let table = self.enrichment.read().unwrap();
        ids.iter()
            .map(|id| {
                table
                    .get(id)
                    .cloned()
                    .ok_or(RelationalError::EnrichmentGap(*id))
            })
            .collect()
    }
}
