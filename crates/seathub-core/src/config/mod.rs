//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod database;
pub mod logging;
pub mod workshop;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::database::{DatabaseBackend, DatabaseConfig};
pub use self::logging::LoggingConfig;
pub use self::workshop::{PricingConfig, WorkshopConfig, WorkshopDetailsConfig};

use crate::error::AppError;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "SEATHUB";

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// configuration (base file + environment overlay + `SEATHUB__*` variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Workshop capacity, pricing, and descriptor.
    #[serde(default)]
    pub workshop: WorkshopConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// `base` is the base TOML file (for example `config/default.toml`).
    /// An overlay named `{env}.toml` in the same directory is merged on top
    /// when present, followed by environment variables prefixed with
    /// `SEATHUB__` (`SEATHUB__DATABASE__URL`, ...).
    pub fn load(base: &str, env: &str) -> Result<Self, AppError> {
        let overlay = Path::new(base)
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(format!("{env}.toml"));

        let config = config::Config::builder()
            .add_source(config::File::from(Path::new(base)).required(false))
            .add_source(config::File::from(overlay).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors.allowed_origins")
                    .with_list_parse_key("workshop.details.session_days")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject combinations that would only fail later at runtime.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.database.backend == DatabaseBackend::Postgres && self.database.url.is_empty() {
            return Err(AppError::configuration(
                "database.url is required when database.backend = \"postgres\"",
            ));
        }
        if self.workshop.total_seats == 0 {
            return Err(AppError::configuration(
                "workshop.total_seats must be greater than zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_workshop() {
        let config = AppConfig::default();
        assert_eq!(config.workshop.total_seats, 20);
        assert_eq!(config.workshop.pricing.early_bird, 2499);
        assert_eq!(config.workshop.pricing.standard, 4499);
        assert_eq!(config.workshop.pricing.early_bird_threshold, 10);
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_postgres_requires_url() {
        let mut config = AppConfig::default();
        config.database.backend = DatabaseBackend::Postgres;
        config.database.url.clear();
        assert!(config.validate().is_err());

        config.database.backend = DatabaseBackend::Memory;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_seats_rejected() {
        let mut config = AppConfig::default();
        config.database.backend = DatabaseBackend::Memory;
        config.workshop.total_seats = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_files_uses_defaults() {
        let config = AppConfig::load("does-not-exist/default.toml", "nowhere");
        // Default backend is postgres with a local URL, so this must succeed.
        let config = config.expect("defaults should validate");
        assert_eq!(config.database.backend, DatabaseBackend::Postgres);
        assert!(!config.database.url.is_empty());
    }
}
