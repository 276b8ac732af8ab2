//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check value shapes (addresses parse, paths absolute, URLs well-formed)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use thiserror::Error;
use url::Url;

use crate::config::schema::GatewayConfig;
use crate::gate::version::Version;

/// A single semantic problem found in a configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid listener bind address '{0}'")]
    InvalidBindAddress(String),

    #[error("invalid upstream address '{0}'")]
    InvalidUpstreamAddress(String),

    #[error("minimum supported version '{0}' parses as 0.0.0; the gate would never intercept")]
    UnusableMinimumVersion(String),

    #[error("bypass path '{0}' must start with '/'")]
    RelativeBypassPath(String),

    #[error("admin path prefix '{0}' must start with '/'")]
    RelativeAdminPrefix(String),

    #[error("{kind} store URL '{url}' is not a valid http(s) URL")]
    InvalidStoreUrl { kind: &'static str, url: String },

    #[error("client product name must not be empty")]
    EmptyClientProduct,
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }
    if config.upstream.address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidUpstreamAddress(
            config.upstream.address.clone(),
        ));
    }

    let gate = &config.gate;
    if Version::parse(&gate.minimum_version) == Version::parse("0") {
        errors.push(ValidationError::UnusableMinimumVersion(
            gate.minimum_version.clone(),
        ));
    }
    for path in &gate.bypass_paths {
        if !path.starts_with('/') {
            errors.push(ValidationError::RelativeBypassPath(path.clone()));
        }
    }
    if !gate.admin_path_prefix.starts_with('/') {
        errors.push(ValidationError::RelativeAdminPrefix(
            gate.admin_path_prefix.clone(),
        ));
    }
    if gate.client_product.trim().is_empty() {
        errors.push(ValidationError::EmptyClientProduct);
    }

    for (kind, url) in [
        ("ios", &gate.notice.ios_store_url),
        ("android", &gate.notice.android_store_url),
    ] {
        let valid = Url::parse(url)
            .map(|u| matches!(u.scheme(), "http" | "https"))
            .unwrap_or(false);
        if !valid {
            errors.push(ValidationError::InvalidStoreUrl {
                kind,
                url: url.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
