//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → gate middleware (forward | synthetic 200)
//!     → upstream.rs (rewrite URI, stream response back)
//!     → Send to client
//! ```

pub mod server;
pub mod upstream;

pub use server::GatewayServer;
pub use upstream::UpstreamClient;
