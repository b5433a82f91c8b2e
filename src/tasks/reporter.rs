//! Stats Reporter Task
//!
//! Background task that periodically logs cache statistics.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::info;

use crate::cache::CacheStore;

/// Spawns a background task that logs a stats snapshot every interval.
///
/// The task only reads from the store. Abort the returned handle to stop it
/// during shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(AnyCache::new());
/// let reporter = spawn_stats_reporter(cache.clone(), 60);
/// // Later, during shutdown:
/// reporter.abort();
/// ```
pub fn spawn_stats_reporter<V>(cache: Arc<CacheStore<V>>, interval_secs: u64) -> JoinHandle<()>
where
    V: Send + Sync + 'static,
{
    let interval = Duration::from_secs(interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting stats reporter with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let stats = cache.stats();
            info!(
                hits = stats.hits,
                misses = stats.misses,
                sets = stats.sets,
                deletes = stats.deletes,
                rejected = stats.rejected,
                entries = stats.total_entries,
                hit_rate = stats.hit_rate(),
                "cache stats"
            );
        }
    })
}
