//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the catch-all forwarding handler
//! - Wire up middleware (compatibility gate, tracing, timeout, request ID)
//! - Bind server to listener and serve with graceful shutdown
//!
//! # Design Decisions
//! - The gate is the innermost layer, so intercepted requests still carry
//!   request IDs and appear in traces
//! - The gate is Arc-shared middleware state; the upstream client is the
//!   handler state

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{uri::InvalidUri, Request},
    middleware,
    response::Response,
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::GatewayConfig;
use crate::gate::{compatibility_gate, CompatibilityGate};
use crate::http::upstream::UpstreamClient;

/// Application state injected into the forwarding handler.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,
}

/// HTTP server for the gateway.
pub struct GatewayServer {
    router: Router,
}

impl GatewayServer {
    /// Create a new gateway server with the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, InvalidUri> {
        let gate = Arc::new(CompatibilityGate::new(config.gate.clone()));
        Self::with_gate(config, gate)
    }

    /// Create a server around an already-constructed gate.
    pub fn with_gate(
        config: GatewayConfig,
        gate: Arc<CompatibilityGate>,
    ) -> Result<Self, InvalidUri> {
        let upstream = Arc::new(UpstreamClient::new(&config.upstream.address)?);
        let state = AppState { upstream };
        let router = Self::build_router(&config, state, gate);
        Ok(Self { router })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState, gate: Arc<CompatibilityGate>) -> Router {
        Router::new()
            .route("/{*path}", any(forward_handler))
            .route("/", any(forward_handler))
            .with_state(state)
            .layer(middleware::from_fn_with_state(gate, compatibility_gate))
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Gateway starting");

        let app = self.router.into_make_service();
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Gateway stopped");
        Ok(())
    }
}

/// Catch-all handler: everything the gate lets through goes upstream.
async fn forward_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    tracing::debug!(
        method = %request.method(),
        path = %request.uri().path(),
        "Forwarding to upstream"
    );
    state.upstream.forward(request).await
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
