//! Configuration Module
//!
//! Settings for the optional periodic cleanup task.
//!
//! The crate reads no environment variables. Hosts construct a
//! [`CleanupConfig`] directly or deserialize it as part of their own
//! configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{CacheError, Result};

/// Default interval between cleanup sweeps, in milliseconds.
pub const DEFAULT_CLEANUP_INTERVAL_MS: u64 = 1000;

/// Cleanup task configuration.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use mini_ttl_cache::CleanupConfig;
///
/// let config = CleanupConfig::new(Duration::from_millis(250));
/// assert_eq!(config.interval(), Duration::from_millis(250));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CleanupConfig {
    /// Interval between sweeps in milliseconds
    pub interval_ms: u64,
}

impl CleanupConfig {
    /// Creates a config sweeping every `interval`, truncated to milliseconds.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval_ms: u64::try_from(interval.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Returns the interval between sweeps.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Checks that the config can drive a cleanup task.
    pub fn validate(&self) -> Result<()> {
        if self.interval_ms == 0 {
            return Err(CacheError::InvalidConfig(
                "interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_CLEANUP_INTERVAL_MS,
        }
    }
}
