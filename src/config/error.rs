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
    #[error("Projection horizon must be between 1 and 20 years")]
    InvalidHorizon,

    #[error("Default interval must be positive")]
    InvalidDefaultInterval,

    #[error("Match tolerance must be non-negative and shorter than the default interval")]
    InvalidMatchTolerance,

    #[error("Near-term reminder window must be positive")]
    InvalidReminderWindow,

    #[error("Projection iteration cap must be positive")]
    InvalidIterationCap,

    #[error("High-confidence CV threshold must be in (0, 1]")]
    InvalidConfidenceThreshold,

    #[error("Retry attempts must be positive")]
    InvalidRetryAttempts,

    #[error("Initial backoff exceeds maximum backoff")]
    InvalidBackoff,

    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),
}
