//! Compatibility gateway (version-gate)
//!
//! Sits in front of the grocery-delivery API and intercepts requests from
//! unsupported mobile clients before they reach business logic.
//!
//! # Architecture Overview
//!
//! ```text
//!                   ┌──────────────────────────────────────────────┐
//!                   │                 VERSION GATE                  │
//!                   │                                               │
//!   Client Request  │  ┌─────────┐   ┌─────────────┐   ┌─────────┐ │
//!   ────────────────┼─▶│  http   │──▶│ gate        │──▶│upstream │─┼──▶ API
//!                   │  │ server  │   │ extract →   │   │forwarder│ │    Server
//!                   │  └─────────┘   │ classify →  │   └─────────┘ │
//!                   │                │ synthesize  │                │
//!   Synthetic 200   │                └──────┬──────┘                │
//!   ◀───────────────┼───────────────────────┘                       │
//!                   │                                               │
//!                   │  ┌──────────────────────────────────────────┐ │
//!                   │  │     config        observability          │ │
//!                   │  └──────────────────────────────────────────┘ │
//!                   └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use version_gate::config::{self, GatewayConfig};
use version_gate::http::GatewayServer;
use version_gate::observability::{logging, metrics};

/// Compatibility gateway for the grocery-delivery API.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => GatewayConfig::default(),
    };

    logging::init(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.address,
        minimum_version = %config.gate.minimum_version,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = GatewayServer::new(config)?;
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
