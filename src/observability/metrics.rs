//! Metrics collection and exposition.
//!
//! # Metrics
//! - `cnpj_lookups_total` (counter): lookups by outcome
//! - `cnpj_lookup_duration_seconds` (histogram): time spent in the lookup handler
//!
//! # Design Decisions
//! - Without an installed recorder every call is a no-op, so handlers and
//!   tests need no special setup
//! - Store failures get their own outcome label even though clients see the
//!   same 204 as for a missing record

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// How a lookup request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    Found,
    NotFound,
    StoreError,
    Invalid,
}

impl LookupOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            LookupOutcome::Found => "found",
            LookupOutcome::NotFound => "not_found",
            LookupOutcome::StoreError => "store_error",
            LookupOutcome::Invalid => "invalid",
        }
    }
}

/// Install the Prometheus recorder and its scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record the result of one lookup request.
pub fn record_lookup(outcome: LookupOutcome, start: Instant) {
    metrics::counter!("cnpj_lookups_total", "outcome" => outcome.as_str()).increment(1);
    metrics::histogram!("cnpj_lookup_duration_seconds").record(start.elapsed().as_secs_f64());
}
