//! Cache Store Module
//!
//! Main cache engine: a `HashMap` behind a single reader-writer lock, with
//! per-entry TTL expiration.
//!
//! Expiration is lazy. An expired entry stays in memory until a `get` for its
//! key or a `cleanup` sweep observes it; `get` never scans the whole store.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tracing::{debug, info, trace};

use crate::cache::stats::StatsCounters;
use crate::cache::{CacheEntry, CacheStats};
use crate::clock::{Clock, SystemClock};

// == Cache ==
/// Concurrency-safe key-value store with per-entry expiration.
///
/// Share it between threads with `Arc<Cache<..>>`; every operation takes
/// `&self`.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use mini_ttl_cache::Cache;
///
/// let cache: Cache<String, u32> = Cache::new();
/// cache.set("answer".to_string(), 42, Duration::from_secs(60));
/// assert_eq!(cache.get("answer").as_deref(), Some(&42));
///
/// cache.delete("answer");
/// assert!(cache.get("answer").is_none());
/// ```
pub struct Cache<K, V, C = SystemClock> {
    /// Key-value storage
    entries: RwLock<HashMap<K, CacheEntry<V>>>,
    /// Time source for computing and checking expiration
    clock: C,
    /// Performance statistics
    stats: StatsCounters,
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash,
{
    // == Constructor ==
    /// Creates an empty cache using the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<K, V> Default for Cache<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> Cache<K, V, C>
where
    K: Eq + Hash,
    C: Clock,
{
    /// Creates an empty cache reading time from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            clock,
            stats: StatsCounters::default(),
        }
    }

    // == Set ==
    /// Stores a value under `key`, replacing any previous entry.
    ///
    /// The entry expires `ttl` after now. A zero `ttl` means it never expires.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl` - Time to live; `Duration::ZERO` for no expiration
    pub fn set(&self, key: K, value: V, ttl: Duration) {
        let entry = CacheEntry::new(value, ttl, self.clock.now());

        let mut entries = self.entries.write();
        entries.insert(key, entry);
        trace!(
            ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX),
            "cache set"
        );
    }

    // == Get ==
    /// Retrieves the value stored under `key`.
    ///
    /// Returns None if the key is absent or its entry has expired. An expired
    /// entry is removed as a side effect.
    pub fn get<Q>(&self, key: &Q) -> Option<Arc<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        {
            let entries = self.entries.read();
            match entries.get(key) {
                None => {
                    self.stats.record_miss();
                    trace!("cache miss");
                    return None;
                }
                Some(entry) if !entry.is_expired(self.clock.now()) => {
                    self.stats.record_hit();
                    trace!("cache hit");
                    return Some(Arc::clone(&entry.value));
                }
                Some(_) => {}
            }
        }

        // Expired under the read lock
        self.get_or_remove_expired(key)
    }

    /// Write-locked half of `get`: re-checks the entry and removes it only if
    /// it is still expired.
    ///
    /// Between releasing the read lock and taking the write lock another
    /// writer may have refreshed or removed the entry, so the earlier
    /// observation cannot be trusted here.
    fn get_or_remove_expired<Q>(&self, key: &Q) -> Option<Arc<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut entries = self.entries.write();
        let now = self.clock.now();
        match entries.get(key) {
            Some(entry) if !entry.is_expired(now) => {
                self.stats.record_hit();
                trace!("cache hit after refresh");
                Some(Arc::clone(&entry.value))
            }
            Some(_) => {
                entries.remove(key);
                self.stats.record_expirations(1);
                self.stats.record_miss();
                debug!("removed expired entry on read");
                None
            }
            None => {
                self.stats.record_miss();
                trace!("cache miss");
                None
            }
        }
    }

    // == Contains Key ==
    /// Returns true if a live entry exists for `key`.
    ///
    /// Unlike `get`, this never removes expired entries or records stats.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let now = self.clock.now();
        self.entries
            .read()
            .get(key)
            .is_some_and(|entry| !entry.is_expired(now))
    }

    // == Delete ==
    /// Removes the entry for `key`, if any.
    ///
    /// Returns true if an entry was removed. Deleting an absent key is a
    /// no-op.
    pub fn delete<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let removed = self.entries.write().remove(key).is_some();
        trace!(removed, "cache delete");
        removed
    }

    // == Cleanup ==
    /// Removes all expired entries from the cache.
    ///
    /// Entries without expiration and entries not yet expired are kept.
    /// Returns the number of entries removed.
    pub fn cleanup(&self) -> usize {
        let mut entries = self.entries.write();
        let now = self.clock.now();
        let before = entries.len();

        entries.retain(|_, entry| !entry.is_expired(now));

        let removed = before - entries.len();
        self.stats.record_expirations(removed);

        if removed > 0 {
            info!(removed, remaining = entries.len(), "swept expired entries");
        } else {
            debug!(remaining = entries.len(), "sweep found no expired entries");
        }
        removed
    }

    // == Clear ==
    /// Removes every entry, expired or not.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.len())
    }

    // == Length ==
    /// Returns the number of stored entries, including expired entries that
    /// have not been observed yet.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<K, V, C> fmt::Debug for Cache<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("entries", &self.entries.read().len())
            .finish_non_exhaustive()
    }
}
