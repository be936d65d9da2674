//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid renderer timeout (must be 1..=30 seconds)")]
    InvalidTimeout,

    #[error("Threshold '{name}' must be in (0, 1], got {value}")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("Exploration minimum turns must be at least 1")]
    InvalidTurnFloor,

    #[error("Core elements required must be between 1 and {max}")]
    InvalidCoreElements { max: usize },

    #[error("Log filter cannot be empty")]
    EmptyLogFilter,
}
