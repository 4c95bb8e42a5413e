//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the lookup and health handlers
//! - Wire up middleware (tracing, request ID, body limit)
//! - Inject the upstream client into handler state
//! - Serve on a listener until shutdown is signalled

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Json, Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::ProxyConfig;
use crate::http::lookup::find_creature;
use crate::http::request::{UuidRequestId, X_REQUEST_ID};
use crate::http::response::HealthStatus;
use crate::lifecycle::shutdown::ShutdownSignal;
use crate::rules::HeightRule;
use crate::upstream::{CreatureSource, PokeApiClient, UpstreamError};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn CreatureSource>,
    pub height_rule: HeightRule,
    /// Deadline for one lookup, upstream call included.
    pub request_timeout: Option<Duration>,
}

/// HTTP server for the creature proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
}

impl HttpServer {
    /// Create a server that looks creatures up through the configured upstream.
    pub fn new(config: ProxyConfig) -> Result<Self, UpstreamError> {
        let client = PokeApiClient::from_config(&config.upstream)?;
        Ok(Self::with_source(config, Arc::new(client)))
    }

    /// Create a server backed by any creature source.
    pub fn with_source(config: ProxyConfig, source: Arc<dyn CreatureSource>) -> Self {
        let state = AppState {
            source,
            height_rule: HeightRule::from_config(&config.rules),
            request_timeout: config.timeouts.request_secs.map(Duration::from_secs),
        };
        let router = build_router(&config, state);
        Self { router, config }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownSignal,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            path = %self.config.handler.path,
            upstream = %self.config.upstream.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.wait().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// Build the Axum router with all middleware layers.
///
/// Oversized bodies and lookup deadlines are answered by the handler
/// itself so they still produce a `{ "message": ... }` body.
pub fn build_router(config: &ProxyConfig, state: AppState) -> Router {
    Router::new()
        .route(&config.handler.path, post(find_creature))
        .route("/health", get(health))
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.security.max_body_size))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(X_REQUEST_ID)),
        )
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
