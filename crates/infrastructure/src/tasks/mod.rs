//! Background tasks driven by the host event loop

mod statistics_refresh;

pub use statistics_refresh::{SharedSnapshot, spawn_statistics_refresh_task};
