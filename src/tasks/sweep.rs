//! Expiry Sweep Task
//!
//! Background task that periodically removes expired renders from the cache.
//! Reads already treat expired entries as absent, so the sweep exists to
//! reclaim memory, not for correctness.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::RenderCache;

/// Spawns a background task that periodically purges expired renders.
///
/// The task loops forever, sleeping between sweeps and taking a write lock
/// on the cache for each purge. The returned handle is used to abort the
/// task during graceful shutdown.
pub fn spawn_sweep_task(
    cache: Arc<RwLock<RenderCache>>,
    sweep_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting expiry sweep task with interval of {} seconds",
            sweep_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.cleanup_expired()
            };

            if removed > 0 {
                info!("Expiry sweep: removed {} stale renders", removed);
            } else {
                debug!("Expiry sweep: nothing to remove");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_sweep_task_removes_expired_renders() {
        let cache = Arc::new(RwLock::new(RenderCache::new(50)));

        {
            let mut cache_guard = cache.write().await;
            cache_guard
                .set("/expire-soon".to_string(), "<html/>".to_string(), 1)
                .unwrap();
        }

        let handle = spawn_sweep_task(cache.clone(), 1);

        // Wait for the entry to expire and the sweep to run
        tokio::time::sleep(Duration::from_millis(2500)).await;

        {
            let cache_guard = cache.read().await;
            assert_eq!(cache_guard.len(), 0, "expired render should have been swept");
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_preserves_valid_renders() {
        let cache = Arc::new(RwLock::new(RenderCache::new(50)));

        {
            let mut cache_guard = cache.write().await;
            cache_guard
                .set("/long-lived".to_string(), "<html/>".to_string(), 3600)
                .unwrap();
        }

        let handle = spawn_sweep_task(cache.clone(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        {
            let mut cache_guard = cache.write().await;
            let result = cache_guard.get("/long-lived").unwrap();
            assert_eq!(result.as_deref(), Some("<html/>"));
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_can_be_aborted() {
        let cache = Arc::new(RwLock::new(RenderCache::new(50)));

        let handle = spawn_sweep_task(cache, 1);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
