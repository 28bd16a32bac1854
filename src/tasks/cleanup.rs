//! Cache Cleanup Task
//!
//! Background task that periodically removes expired cached responses.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a task that purges expired entries every `cleanup_interval_secs`.
///
/// The returned handle is aborted during graceful shutdown.
pub fn spawn_cleanup_task(
    cache: Arc<RwLock<CacheStore>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting cache cleanup task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let (removed, stats) = {
                let mut cache_guard = cache.write().await;
                let removed = cache_guard.cleanup_expired();
                (removed, cache_guard.stats())
            };

            if removed > 0 {
                info!(
                    "Cache cleanup: removed {} expired responses, {} remain (hit rate {:.2})",
                    removed,
                    stats.total_entries,
                    stats.hit_rate()
                );
            } else {
                debug!(
                    "Cache cleanup: nothing expired, {} entries, {} evictions so far",
                    stats.total_entries, stats.evictions
                );
            }
        }
    })
}
