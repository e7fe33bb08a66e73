//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the route table (`routes`) from an injected company store
//! - Wire up middleware (tracing, request ID, body limit)
//! - Serve on a bound listener until shutdown is signalled
//!
//! No request timeout is installed: a slow store delays the response but the
//! request still completes with the usual JSON contract.

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::any, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::http::handlers::{health, lookup_company};
use crate::store::CompanyStore;

/// Path of the company lookup route.
pub const LOOKUP_PATH: &str = "/";
/// Path of the liveness route.
pub const HEALTH_PATH: &str = "/healthz";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CompanyStore>,
}

/// Route table for the service, without middleware.
///
/// Handlers can be exercised in-process with `tower::ServiceExt::oneshot`.
pub fn routes(store: Arc<dyn CompanyStore>) -> Router {
    Router::new()
        .route(LOOKUP_PATH, any(lookup_company))
        .route(HEALTH_PATH, any(health))
        .with_state(AppState { store })
}

/// HTTP server for the lookup service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Wrap `routes` with the middleware stack described by `config`.
    pub fn new(config: &ServiceConfig, routes: Router) -> Self {
        Self {
            router: Self::build_router(config, routes),
        }
    }

    // The body limit is only recorded here; `lookup_company` enforces it
    // after the method check so oversized bodies still get JSON errors.
    fn build_router(config: &ServiceConfig, routes: Router) -> Router {
        routes.layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(DefaultBodyLimit::max(config.listener.max_body_bytes)),
        )
    }

    /// The fully layered router, for serving in-process.
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("HTTP server draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
