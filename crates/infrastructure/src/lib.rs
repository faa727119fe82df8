//! Infrastructure layer - host concerns around the domain core
//!
//! Configuration loading, telemetry initialization and the periodic
//! statistics refresh task. Owns everything the application layer should not
//! know about: files, environment variables and the async runtime.

pub mod config;
pub mod tasks;
pub mod telemetry;

pub use config::{AppConfig, FixedTariffEntry, StatisticsConfig, TariffsConfig};
pub use tasks::{SharedSnapshot, spawn_statistics_refresh_task};
pub use telemetry::{TelemetryError, init_telemetry};
