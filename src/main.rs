//! CNPJ Company Lookup Service
//!
//! Serves Brazilian company registry records by CNPJ over HTTP.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌───────────────────────────────────────────────┐
//!                      │               CNPJ LOOKUP                     │
//!   POST / cnpj=...    │  ┌─────────┐   ┌──────────┐   ┌───────────┐   │
//!  ────────────────────┼─▶│  http   │──▶│   cnpj   │──▶│   store   │───┼──▶ PostgreSQL
//!                      │  │ handler │   │ validate │   │  (trait)  │   │    or memory
//!  ◀───────────────────┼──│response │◀──────────────────│           │   │
//!   200 / 204 / 400    │  └─────────┘                   └───────────┘   │
//!                      │                                                │
//!   GET /healthz       │  config · observability · lifecycle            │
//!                      └───────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use cnpj_lookup::config::{read_config, validate_config, ConfigError, ServiceConfig};
use cnpj_lookup::lifecycle::startup;
use cnpj_lookup::observability::logging;

#[derive(Parser)]
#[command(name = "cnpj-lookup")]
#[command(about = "HTTP API serving company registry data by CNPJ", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, env = "CNPJ_LOOKUP_CONFIG")]
    config: Option<PathBuf>,

    /// Port to listen on (overrides listener.bind_address)
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// PostgreSQL URL; selects the postgres store
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
}

impl Cli {
    fn into_config(self) -> Result<ServiceConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => ServiceConfig::default(),
        };

        if let Some(port) = self.port {
            config.listener.set_port(port);
        }
        if let Some(url) = self.database_url {
            config.store.backend = cnpj_lookup::config::StoreBackend::Postgres;
            config.store.database_url = Some(url);
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config()?;

    logging::init_tracing(&config.observability.log_level);

    tracing::info!("cnpj-lookup v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        max_body_bytes = config.listener.max_body_bytes,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
