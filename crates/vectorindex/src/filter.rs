//! Filter compilation: turn a caller-supplied field→value mapping into a
//! backend-agnostic predicate.
//!
//! `date_from`/`date_to` become a range predicate on `registry_date` (either
//! a POSIX timestamp or a `YYYY-MM-DD` string, converted to a timestamp);
//! any other key becomes an exact-match predicate on the same-named payload
//! field. A null value is skipped. The conjunction is AND; an empty filter
//! yields no predicate.

use chrono::NaiveDate;

use crate::error::VectorIndexError;
use crate::types::{FilterValue, RawFilter};

/// A compiled, backend-agnostic filter predicate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompiledFilter {
    pub date_from: Option<f64>,
    pub date_to: Option<f64>,
    pub exact: Vec<(String, String)>,
}

impl CompiledFilter {
    pub fn is_empty(&self) -> bool {
        self.date_from.is_none() && self.date_to.is_none() && self.exact.is_empty()
    }

    pub fn matches(&self, payload: &crate::types::PointPayload) -> bool {
        if let Some(from) = self.date_from {
            if payload.registry_date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if payload.registry_date > to {
                return false;
            }
        }
        for (key, value) in &self.exact {
            let field = match key.as_str() {
                "client" => &payload.client,
                "product" => &payload.product,
                "text" => &payload.text,
                _ => return false,
            };
            if field != value {
                return false;
            }
        }
        true
    }
}

pub fn compile(filter: &RawFilter) -> Result<CompiledFilter, VectorIndexError> {
    let mut compiled = CompiledFilter::default();
    for (key, value) in filter {
        let Some(value) = value else {
            continue;
        };
        match key.as_str() {
            "date_from" => compiled.date_from = Some(to_timestamp(key, value)?),
            "date_to" => compiled.date_to = Some(to_timestamp(key, value)?),
            other => {
                let s = match value {
                    FilterValue::Str(s) => s.clone(),
                    FilterValue::Date(s) => s.clone(),
                    FilterValue::Timestamp(_) => {
                        return Err(VectorIndexError::InvalidFilter {
                            key: other.to_string(),
                            reason: "exact-match filters must be strings".into(),
                        })
                    }
                };
                compiled.exact.push((other.to_string(), s));
            }
        }
    }
    Ok(compiled)
}

fn to_timestamp(key: &str, value: &FilterValue) -> Result<f64, VectorIndexError> {
    match value {
        FilterValue::Timestamp(ts) => Ok(*ts),
        FilterValue::Date(s) | FilterValue::Str(s) => {
            let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| {
                VectorIndexError::InvalidFilter {
                    key: key.to_string(),
                    reason: format!("expected POSIX timestamp or YYYY-MM-DD: {e}"),
                }
            })?;
            let datetime = date
                .and_hms_opt(0, 0, 0)
                .expect("midnight is always a valid time")
                .and_utc();
            Ok(datetime.timestamp() as f64)
        }
    }
}
