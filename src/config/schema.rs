//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream the gateway forwards non-intercepted traffic to.
    pub upstream: UpstreamConfig,

    /// Compatibility gate settings.
    pub gate: GateConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Upstream API server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Upstream address (e.g., "127.0.0.1:3000").
    pub address: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Compatibility gate configuration.
///
/// Every knob the gate consults lives here; the gate holds an immutable
/// copy taken at construction, so there is no process-global state to
/// monkey-patch in tests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GateConfig {
    /// Minimum supported client version; anything strictly below is
    /// classified outdated.
    pub minimum_version: String,

    /// Auth-bootstrap path prefixes that always pass through. Extensible;
    /// entries are matched as prefixes.
    pub bypass_paths: Vec<String>,

    /// Path prefix for admin traffic, always passed through.
    pub admin_path_prefix: String,

    /// Substring identifying admin origins (matched case-insensitively
    /// against the `Origin` header).
    pub admin_origin_marker: String,

    /// Primary version header.
    pub version_header: String,

    /// Alias version header, checked second.
    pub version_header_alias: String,

    /// Free-form client identifier header, parsed as a last resort.
    pub client_id_header: String,

    /// Product token expected at the start of the client identifier
    /// (e.g., "BenimMarketim" in "BenimMarketim/1.9.0 (Build 10)").
    pub client_product: String,

    /// Update notice embedded in every synthetic response.
    pub notice: NoticeConfig,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            minimum_version: "2.0.0".to_string(),
            bypass_paths: vec![
                "/api/auth/login".to_string(),
                "/api/auth/signup".to_string(),
                "/api/auth/refresh-token".to_string(),
                "/api/auth/forgot-password".to_string(),
            ],
            admin_path_prefix: "/admin".to_string(),
            admin_origin_marker: "admin".to_string(),
            version_header: "x-app-version".to_string(),
            version_header_alias: "x-client-version".to_string(),
            client_id_header: "user-agent".to_string(),
            client_product: "BenimMarketim".to_string(),
            notice: NoticeConfig::default(),
        }
    }
}

/// The "update required" notice shown by legacy clients.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NoticeConfig {
    /// Notice title.
    pub title: String,

    /// Notice message.
    pub message: String,

    /// App Store URL for iOS clients.
    pub ios_store_url: String,

    /// Play Store URL for Android clients.
    pub android_store_url: String,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            title: "Update required".to_string(),
            message: "Please update the app to continue ordering.".to_string(),
            ios_store_url: "https://apps.apple.com/app/id0000000000".to_string(),
            android_store_url:
                "https://play.google.com/store/apps/details?id=com.benimmarketim.app".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
