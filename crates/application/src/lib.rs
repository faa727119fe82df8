//! Application layer - Use cases and orchestration
//!
//! Holds the process-wide client registry and tariff catalog, the client
//! service facade the presentation layer calls, and the statistics
//! aggregation over the registry.

pub mod error;
pub mod services;

pub use error::ApplicationError;
pub use services::*;
