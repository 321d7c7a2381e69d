//! # CLI Error Types
//!
//! Everything that can stop the `pricer` binary. Estimation itself never
//! fails, so every variant here is about configuration or output.

use std::path::PathBuf;

use pricer_core::ConfigError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type AppResult<T> = Result<T, AppError>;

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum AppError {
    /// The config file exists but could not be read.
    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML, or its rate table is invalid.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The merged configuration failed validation.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The quote could not be rendered as JSON.
    #[error("Failed to serialize quote: {0}")]
    Serialize(#[from] serde_json::Error),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts() {
        let err: AppError = ConfigError::EmptyCurrencySymbol.into();
        assert!(matches!(err, AppError::Config(_)));
        assert_eq!(
            err.to_string(),
            "Invalid configuration: Currency symbol must not be empty"
        );
    }

    #[test]
    fn test_read_error_names_path() {
        let err = AppError::ConfigRead {
            path: PathBuf::from("/etc/pricer.toml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Failed to read config /etc/pricer.toml: denied");
    }
}
