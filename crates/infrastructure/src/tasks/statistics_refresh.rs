//! Periodic statistics refresh task
//!
//! Recomputes the registry statistics on a fixed interval and publishes the
//! result into a shared cell the presentation layer reads. The task is
//! strictly read-only with respect to the domain model.

use std::sync::Arc;
use std::time::Duration;

use application::{StatisticsService, StatisticsSnapshot};
use parking_lot::RwLock;
use tracing::{debug, info};

/// Default refresh interval, matching the desktop tool's 3-second timer
const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 3;

/// Shared cell holding the most recent statistics snapshot
pub type SharedSnapshot = Arc<RwLock<Option<StatisticsSnapshot>>>;

/// Spawn a background task that periodically recomputes registry statistics.
///
/// Each tick takes a fresh read-only snapshot and stores it in `latest`.
/// The first recomputation happens one interval after spawning, not
/// immediately.
///
/// Returns a `JoinHandle` that can be used to abort the task when shutting
/// down.
///
/// # Example
///
/// ```ignore
/// let latest: SharedSnapshot = Arc::new(RwLock::new(None));
/// let handle = spawn_statistics_refresh_task(stats, Arc::clone(&latest), None);
///
/// // On shutdown:
/// handle.abort();
/// ```
pub fn spawn_statistics_refresh_task(
    stats: Arc<StatisticsService>,
    latest: SharedSnapshot,
    refresh_interval: Option<Duration>,
) -> tokio::task::JoinHandle<()> {
    let interval =
        refresh_interval.unwrap_or(Duration::from_secs(DEFAULT_REFRESH_INTERVAL_SECS));

    info!(
        interval_secs = interval.as_secs(),
        "Starting statistics refresh task"
    );

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // Don't recompute immediately on startup
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let snapshot = stats.snapshot();
            debug!(
                total_clients = snapshot.total_clients,
                active_clients = snapshot.active_clients,
                total_revenue = %snapshot.total_revenue,
                "Refreshed registry statistics"
            );

            *latest.write() = Some(snapshot);
        }
    })
}
