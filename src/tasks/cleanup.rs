//! TTL Cleanup Task
//!
//! Background task that periodically removes expired cache entries.

use std::hash::Hash;
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::info;

use crate::cache::Cache;
use crate::clock::Clock;
use crate::config::CleanupConfig;
use crate::error::Result;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The task sleeps for the configured interval between sweeps. It holds only
/// a weak reference to the cache and stops on its own once every other owner
/// has dropped it. Abort the returned handle to stop it earlier.
///
/// Must be called from within a tokio runtime.
///
/// # Arguments
/// * `cache` - Shared reference to the cache to sweep
/// * `config` - Cleanup settings; the interval must be non-zero
///
/// # Errors
/// Returns `CacheError::InvalidConfig` if the interval is zero.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(Cache::<String, String>::new());
/// let cleanup_handle = spawn_cleanup_task(&cache, &CleanupConfig::default())?;
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task<K, V, C>(
    cache: &Arc<Cache<K, V, C>>,
    config: &CleanupConfig,
) -> Result<JoinHandle<()>>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Send + Sync + 'static,
    C: Clock + 'static,
{
    config.validate()?;

    let interval = config.interval();
    let weak = Arc::downgrade(cache);

    Ok(tokio::spawn(async move {
        info!(
            interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX),
            "Starting TTL cleanup task"
        );

        loop {
            tokio::time::sleep(interval).await;

            let Some(cache) = weak.upgrade() else {
                info!("Cache dropped, stopping TTL cleanup task");
                break;
            };
            cache.cleanup();
        }
    }))
}
