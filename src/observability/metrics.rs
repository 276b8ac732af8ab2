//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Expose a Prometheus-compatible metrics endpoint (optional)
//! - Track gate decisions and interceptions
//!
//! # Metrics
//! - `gate_requests_total` (counter): requests by classification
//! - `gate_intercepts_total` (counter): synthetic responses by template
//!
//! # Design Decisions
//! - Metric updates are cheap atomic increments via the metrics facade
//! - Recording works with or without an installed exporter, so the gate
//!   code never branches on observability config

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on the given address.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Count a gate decision by classification.
pub fn record_decision(classification: &'static str) {
    metrics::counter!("gate_requests_total", "classification" => classification).increment(1);
}

/// Count a synthetic response by matched template.
pub fn record_intercept(template: &'static str) {
    metrics::counter!("gate_intercepts_total", "template" => template).increment(1);
}
