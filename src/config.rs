//! Process-wide, read-only configuration loaded once at startup from a
//! single YAML document, with an environment-variable override layer —
//! the same `config` crate binding the server crate uses for its own
//! settings.
//!
//! ```yaml
//! model:
//!   path: "models/stub"
//!   model_name: "stub-sinusoid-v1"
//! database:
//!   relational_db:
//!     url: "postgres://localhost/tickets"
//!   vector_db:
//!     main:
//!       url: "http://localhost:6334"
//!       collection_name: "tickets"
//!       date_from: "2025-11-14"
//!     indexing:
//!       m_value: 16
//!       ef_construct: 100
//!       full_scan_threshold: 10000
//!       max_indexing_threads: 0
//!       on_disk: false
//! logging:
//!   level: "INFO"
//! service:
//!   threshold: 0.0
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vectorindex::HnswConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub path: String,
    pub model_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationalDbConfig {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorMainConfig {
    pub url: String,
    pub collection_name: String,
    pub date_from: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorIndexingConfig {
    pub m_value: u64,
    pub ef_construct: u64,
    pub full_scan_threshold: u64,
    pub max_indexing_threads: u64,
    pub on_disk: bool,
}

impl From<&VectorIndexingConfig> for HnswConfig {
    fn from(cfg: &VectorIndexingConfig) -> Self {
        HnswConfig {
            m: cfg.m_value,
            ef_construct: cfg.ef_construct,
            full_scan_threshold: cfg.full_scan_threshold,
            max_indexing_threads: cfg.max_indexing_threads,
            on_disk: cfg.on_disk,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorDbConfig {
    pub main: VectorMainConfig,
    pub indexing: VectorIndexingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub relational_db: RelationalDbConfig,
    pub vector_db: VectorDbConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "INFO".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub threshold: f32,
}

/// Process-wide configuration, constructed once in `main` and handed by
/// reference/`Arc` to every other component — no ambient/global access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub model: ModelConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub service: ServiceConfig,
}

impl AppConfig {
    /// Load from a YAML file (if present) overridden by `APP__`-prefixed,
    /// `__`-separated environment variables.
    pub fn load(config_name: &str) -> Result<Self, ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name(config_name).required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"));

        Ok(builder.build()?.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hnsw_config_conversion_preserves_fields() {
        let cfg = VectorIndexingConfig {
            m_value: 32,
            ef_construct: 200,
            full_scan_threshold: 5_000,
            max_indexing_threads: 4,
            on_disk: true,
        };
        let hnsw: HnswConfig = (&cfg).into();
        assert_eq!(hnsw.m, 32);
        assert_eq!(hnsw.ef_construct, 200);
        assert_eq!(hnsw.full_scan_threshold, 5_000);
        assert_eq!(hnsw.max_indexing_threads, 4);
        assert!(hnsw.on_disk);
    }

    #[test]
    fn default_log_level_is_info() {
        assert_eq!(default_log_level(), "INFO");
    }
}
