//! Background Tasks Module
//!
//! Contains background tasks a host can run alongside a cache.
//!
//! # Tasks
//! - TTL Cleanup: Sweeps expired cache entries at a configured interval

mod cleanup;

pub use cleanup::spawn_cleanup_task;
