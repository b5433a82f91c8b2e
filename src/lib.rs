//! Memory Cache - A thread-safe in-process key-value store
//!
//! Stores arbitrary values by string key behind a small `set`/`get`/`del`
//! interface, safe to share across threads without external locking.

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{AnyCache, Cache, CacheStats, CacheStore, DynValue};
pub use config::Config;
pub use error::{CacheError, Result};
pub use tasks::spawn_stats_reporter;
