//! Company store subsystem.
//!
//! # Data Flow
//! ```text
//! StoreConfig
//!     → connect() picks a backend
//!     → Arc<dyn CompanyStore> injected into the HTTP router state
//!
//! Request path:
//!     handler → get_company(canonical cnpj) → Ok(Company) | Err(StoreError)
//! ```
//!
//! # Design Decisions
//! - The handler only ever sees the trait; backends are swappable
//! - Callers pass canonical identifiers; stores do no validation of their own
//! - Concurrency safety is each backend's responsibility (DashMap, sqlx pool)

pub mod memory;
#[cfg(feature = "postgres")]
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::company::Company;
use crate::config::schema::{StoreBackend, StoreConfig};

pub use memory::MemoryStore;
#[cfg(feature = "postgres")]
pub use postgres::PostgresStore;

/// Errors a company store can report.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record exists for the identifier.
    #[error("company {0} not found")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode company record: {0}")]
    Decode(#[from] serde_json::Error),

    #[cfg(feature = "postgres")]
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The configured backend is not available in this build.
    #[error("store backend unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// True when the store answered and the record simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

/// Resolves a canonical CNPJ to a company record.
#[async_trait]
pub trait CompanyStore: Send + Sync {
    /// Fetch the company registered under `cnpj` (14 digits, no punctuation).
    async fn get_company(&self, cnpj: &str) -> Result<Company, StoreError>;
}

/// Build the store selected in the configuration.
pub async fn connect(config: &StoreConfig) -> Result<Arc<dyn CompanyStore>, StoreError> {
    match config.backend {
        StoreBackend::Memory => {
            let store = match &config.data_path {
                Some(path) => MemoryStore::from_json_file(path)?,
                None => MemoryStore::new(),
            };
            tracing::info!(records = store.len(), "In-memory company store ready");
            Ok(Arc::new(store))
        }
        StoreBackend::Postgres => connect_postgres(config).await,
    }
}

#[cfg(feature = "postgres")]
async fn connect_postgres(config: &StoreConfig) -> Result<Arc<dyn CompanyStore>, StoreError> {
    let url = config
        .database_url
        .as_deref()
        .ok_or_else(|| StoreError::Unavailable("postgres backend requires database_url".into()))?;
    let store = PostgresStore::connect(url, config.max_connections).await?;
    tracing::info!(max_connections = config.max_connections, "PostgreSQL company store ready");
    Ok(Arc::new(store))
}

#[cfg(not(feature = "postgres"))]
async fn connect_postgres(_config: &StoreConfig) -> Result<Arc<dyn CompanyStore>, StoreError> {
    Err(StoreError::Unavailable(
        "built without the `postgres` feature".into(),
    ))
}
