//! Application error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Telemetry error: {0}")]
    TelemetryError(String),

    #[error("Insecure configuration: {0}")]
    InsecureConfig(String),
}
