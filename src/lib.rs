//! Mini TTL Cache - A lightweight in-process key-value cache
//!
//! Stores values under keys with a per-entry time to live. Expired entries
//! are removed lazily, on the next read of their key, or in bulk by
//! [`Cache::cleanup`], which a host can schedule with [`spawn_cleanup_task`].
//!
//! # Example
//! ```
//! use std::time::Duration;
//! use mini_ttl_cache::Cache;
//!
//! let cache: Cache<&str, String> = Cache::new();
//! cache.set("session", "token-123".to_string(), Duration::from_secs(30));
//! cache.set("config", "static".to_string(), Duration::ZERO); // never expires
//!
//! assert_eq!(cache.get("session").as_deref().map(String::as_str), Some("token-123"));
//! assert_eq!(cache.cleanup(), 0);
//! ```

pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{Cache, CacheStats};
pub use clock::{Clock, MockClock, SystemClock};
pub use config::CleanupConfig;
pub use error::{CacheError, Result};
pub use tasks::spawn_cleanup_task;
