//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `BREEDING_PLANNER` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a working setup.
//!
//! # Example
//!
//! ```no_run
//! use breeding_planner::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Kennel data at {}", config.storage.data_path.display());
//! ```

mod error;
mod logging;
mod planning;
mod retry;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use planning::PlanningConfig;
pub use retry::RetryConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Planning engine parameters
    #[serde(default)]
    pub planning: PlanningConfig,

    /// Bounded retry for storage calls
    #[serde(default)]
    pub retry: RetryConfig,

    /// Kennel data location
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `BREEDING_PLANNER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `BREEDING_PLANNER__PLANNING__HORIZON_YEARS=3` -> `planning.horizon_years = 3`
    /// - `BREEDING_PLANNER__STORAGE__DATA_PATH=...` -> `storage.data_path = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("BREEDING_PLANNER")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.planning.validate()?;
        self.retry.validate()?;
        self.storage.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "BREEDING_PLANNER__PLANNING__HORIZON_YEARS",
        "BREEDING_PLANNER__PLANNING__MATCH_TOLERANCE_DAYS",
        "BREEDING_PLANNER__RETRY__MAX_ATTEMPTS",
        "BREEDING_PLANNER__STORAGE__DATA_PATH",
        "BREEDING_PLANNER__LOGGING__JSON",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn loads_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.planning.horizon_years, 2);
        assert_eq!(config.planning.match_tolerance_days, 14);
        assert_eq!(config.retry.max_attempts, 3);
        assert_eq!(config.storage.data_path, PathBuf::from("kennel.json"));
        assert_eq!(config.logging.filter, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn loads_overrides_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("BREEDING_PLANNER__PLANNING__HORIZON_YEARS", "3");
        env::set_var("BREEDING_PLANNER__PLANNING__MATCH_TOLERANCE_DAYS", "21");
        env::set_var("BREEDING_PLANNER__RETRY__MAX_ATTEMPTS", "5");
        env::set_var("BREEDING_PLANNER__STORAGE__DATA_PATH", "/var/lib/kennel.json");
        env::set_var("BREEDING_PLANNER__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.planning.horizon_years, 3);
        assert_eq!(config.planning.to_parameters().match_tolerance_days, 21);
        assert_eq!(config.retry.max_attempts, 5);
        assert_eq!(config.storage.data_path, PathBuf::from("/var/lib/kennel.json"));
        assert!(config.logging.json);
    }

    #[test]
    fn validate_default_config() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_data_path() {
        let mut config = AppConfig::default();
        config.storage.data_path = PathBuf::new();
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("storage.data_path"))
        );
    }

    #[test]
    fn invalid_environment_value_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("BREEDING_PLANNER__PLANNING__HORIZON_YEARS", "0");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.validate(), Err(ValidationError::InvalidHorizon));
    }
}
