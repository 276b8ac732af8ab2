//! Configuration loading from disk.

use std::path::Path;
use thiserror::Error;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<GatewayConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: GatewayConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_parses_with_defaults() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [gate]
            minimum_version = "2.3.0"
            "#,
        )
        .unwrap();
        assert_eq!(config.gate.minimum_version, "2.3.0");
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert!(!config.gate.bypass_paths.is_empty());
    }

    #[test]
    fn test_bypass_paths_are_extensible() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [gate]
            bypass_paths = ["/api/auth/login", "/api/legal/terms"]
            "#,
        )
        .unwrap();
        assert_eq!(config.gate.bypass_paths.len(), 2);
        assert!(validate_config(&config).is_ok());
    }
}
