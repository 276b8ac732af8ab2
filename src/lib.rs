//! Compatibility gateway for the grocery-delivery API.
//!
//! Detects stale mobile clients and substitutes synthetic, endpoint-shaped
//! responses for their requests instead of forwarding them, while always
//! letting bootstrap and admin traffic through.

pub mod config;
pub mod gate;
pub mod http;
pub mod observability;

pub use config::{GateConfig, GatewayConfig};
pub use gate::{CompatibilityGate, GateDecision};
pub use http::GatewayServer;
