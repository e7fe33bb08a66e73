//! PostgreSQL company store.
//!
//! Reads from the table populated by the bulk importer: one row per company,
//! keyed by canonical CNPJ in `id`, with the full record as JSON in `json`.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::types::Json;

use crate::company::Company;
use crate::store::{CompanyStore, StoreError};

const SELECT_COMPANY: &str = "SELECT json FROM cnpj WHERE id = $1";

/// Company store backed by a PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Open a pool against `url`.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyStore for PostgresStore {
    async fn get_company(&self, cnpj: &str) -> Result<Company, StoreError> {
        let row: Option<Json<Company>> = sqlx::query_scalar(SELECT_COMPANY)
            .bind(cnpj)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|Json(company)| company)
            .ok_or_else(|| StoreError::NotFound(cnpj.to_string()))
    }
}
