//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::sync::Arc;
use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single cache entry: a value handle and its expiration instant.
#[derive(Debug)]
pub(crate) struct CacheEntry<V> {
    /// The stored value, shared with callers of `get`
    pub(crate) value: Arc<V>,
    /// Expiration instant, None = never expires
    pub(crate) expires_at: Option<Instant>,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry expiring `ttl` after `now`.
    ///
    /// A zero `ttl` means the entry never expires. So does a `ttl` large
    /// enough to overflow `Instant`.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl` - Time to live, measured from `now`
    /// * `now` - Current instant as read from the cache's clock
    pub(crate) fn new(value: V, ttl: Duration, now: Instant) -> Self {
        let expires_at = if ttl.is_zero() {
            None
        } else {
            now.checked_add(ttl)
        };

        Self {
            value: Arc::new(value),
            expires_at,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now`.
    ///
    /// Boundary condition: the entry is expired only once `now` is strictly
    /// past `expires_at`. At exactly `expires_at` it is still live.
    pub(crate) fn is_expired(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires) => now > expires,
            None => false,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation_no_ttl() {
        let now = Instant::now();
        let entry = CacheEntry::new("test_value", Duration::ZERO, now);

        assert_eq!(*entry.value, "test_value");
        assert!(entry.expires_at.is_none());
        assert!(!entry.is_expired(now));
    }

    #[test]
    fn test_entry_creation_with_ttl() {
        let now = Instant::now();
        let entry = CacheEntry::new("test_value", Duration::from_secs(60), now);

        assert_eq!(entry.expires_at, Some(now + Duration::from_secs(60)));
        assert!(!entry.is_expired(now));
    }

    #[test]
    fn test_entry_expiration() {
        let now = Instant::now();
        let entry = CacheEntry::new(1u32, Duration::from_secs(1), now);

        assert!(!entry.is_expired(now + Duration::from_millis(500)));
        assert!(entry.is_expired(now + Duration::from_millis(1100)));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = Instant::now();
        let entry = CacheEntry::new(1u32, Duration::from_secs(1), now);
        let deadline = now + Duration::from_secs(1);

        assert!(!entry.is_expired(deadline), "Entry is live at its deadline");
        assert!(entry.is_expired(deadline + Duration::from_nanos(1)));
    }

    #[test]
    fn test_never_expires_far_in_future() {
        let now = Instant::now();
        let entry = CacheEntry::new(1u32, Duration::ZERO, now);

        assert!(!entry.is_expired(now + Duration::from_secs(10 * 365 * 24 * 3600)));
    }

    #[test]
    fn test_overflowing_ttl_never_expires() {
        let now = Instant::now();
        let entry = CacheEntry::new(1u32, Duration::MAX, now);

        assert!(entry.expires_at.is_none());
        assert!(!entry.is_expired(now + Duration::from_secs(3600)));
    }

    #[test]
    fn test_value_is_shared_not_copied() {
        let entry = CacheEntry::new(vec![1, 2, 3], Duration::ZERO, Instant::now());
        let handle = Arc::clone(&entry.value);

        assert!(Arc::ptr_eq(&handle, &entry.value));
    }
}
