//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! gate + server produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (decision/intercept counters)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Structured logging with request IDs for correlation
//! - Metrics are cheap (atomic increments) and safe without an exporter

pub mod logging;
pub mod metrics;
