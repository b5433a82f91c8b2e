//! Cache Module
//!
//! Provides the thread-safe in-memory key-value store.

mod shard;
mod stats;
mod store;
mod traits;
mod value;


// Re-export public types
pub use stats::CacheStats;
pub use store::CacheStore;
pub use traits::Cache;
pub use value::{AnyCache, DynValue};

// == Public Constants ==
/// Number of shards used by `CacheStore::new`
pub const DEFAULT_SHARDS: usize = 16;
