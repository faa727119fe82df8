//! Application configuration
//!
//! Loaded from an optional `config.toml` next to the executable, with
//! `PROVDESK_*` environment variables taking precedence. Every section has
//! serde defaults, so an absent file yields a fully usable configuration.

use std::time::Duration;

use application::{ApplicationError, TariffCatalog};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Statistics refresh settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsConfig {
    /// Seconds between two statistics recomputations
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: default_refresh_interval_secs(),
        }
    }
}

impl StatisticsConfig {
    /// Refresh interval as a [`Duration`]
    #[must_use]
    pub const fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}

const fn default_refresh_interval_secs() -> u64 {
    3
}

/// A fixed tariff declared in the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedTariffEntry {
    /// Display name of the tariff
    pub name: String,
    /// Flat monthly price
    pub monthly_price: Decimal,
}

/// Tariff catalog seed settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TariffsConfig {
    /// Fixed tariffs appended to the catalog at startup
    #[serde(default)]
    pub fixed: Vec<FixedTariffEntry>,
}

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Statistics refresh settings
    #[serde(default)]
    pub statistics: StatisticsConfig,

    /// Tariff catalog seed settings
    #[serde(default)]
    pub tariffs: TariffsConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (optional) and `PROVDESK_*`
    /// environment variables
    ///
    /// Environment variables use `__` as the section separator, e.g.
    /// `PROVDESK_STATISTICS__REFRESH_INTERVAL_SECS=10`.
    ///
    /// # Errors
    ///
    /// Returns a [`config::ConfigError`] when the file or an override cannot
    /// be parsed.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("PROVDESK").separator("__"))
            .build()?;

        let loaded: Self = settings.try_deserialize()?;
        debug!(
            refresh_interval_secs = loaded.statistics.refresh_interval_secs,
            fixed_tariffs = loaded.tariffs.fixed.len(),
            "Configuration loaded"
        );
        Ok(loaded)
    }

    /// Load configuration from a specific TOML file
    ///
    /// # Errors
    ///
    /// Returns a [`config::ConfigError`] when the file is missing or cannot
    /// be parsed.
    pub fn load_from(path: &std::path::Path) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .build()?;
        settings.try_deserialize()
    }

    /// Append the configured fixed tariffs to `catalog`
    ///
    /// Returns the number of tariffs added.
    ///
    /// # Errors
    ///
    /// Returns the first domain rejection (e.g. a blank tariff name);
    /// entries before the failing one remain in the catalog.
    pub fn seed_catalog(&self, catalog: &TariffCatalog) -> Result<usize, ApplicationError> {
        for entry in &self.tariffs.fixed {
            catalog.add_fixed(&entry.name, entry.monthly_price)?;
        }

        if !self.tariffs.fixed.is_empty() {
            info!(
                count = self.tariffs.fixed.len(),
                "Seeded tariff catalog from configuration"
            );
        }
        Ok(self.tariffs.fixed.len())
    }
}
