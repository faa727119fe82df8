//! Application services - Use case implementations

mod client_service;
mod registry;
mod statistics;
mod tariff_catalog;

pub use client_service::ClientService;
pub use registry::ClientRegistry;
pub use statistics::{StatisticsService, StatisticsSnapshot};
pub use tariff_catalog::TariffCatalog;
