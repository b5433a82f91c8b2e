//! Cache Store Module
//!
//! Main cache engine: a sharded map guarded by reader/writer locks.

use std::collections::hash_map::RandomState;
use std::hash::BuildHasher;

use tracing::{debug, trace};

use crate::cache::shard::Shard;
use crate::cache::stats::StatsRecorder;
use crate::cache::{CacheStats, DEFAULT_SHARDS};
use crate::config::Config;
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Thread-safe key-value store.
///
/// Keys are spread over a fixed set of shards; each key always lives in the
/// same shard, and every operation on it runs under that shard's lock. Share
/// a store between threads by wrapping it in an `Arc`.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Lock-guarded partitions of the key space
    shards: Box<[Shard<V>]>,
    /// Per-store hasher used to pick a shard
    hasher: RandomState,
    /// Activity counters
    stats: StatsRecorder,
}

impl<V> CacheStore<V> {
    // == Constructors ==
    /// Creates an empty store with the default number of shards.
    pub fn new() -> Self {
        Self::with_shards(DEFAULT_SHARDS)
    }

    /// Creates an empty store split across `shards` partitions.
    ///
    /// A shard count of zero is treated as one.
    pub fn with_shards(shards: usize) -> Self {
        Self::with_shards_and_capacity(shards, 0)
    }

    /// Creates an empty store with `capacity` entry slots pre-allocated across
    /// `shards` partitions.
    pub fn with_shards_and_capacity(shards: usize, capacity: usize) -> Self {
        let shard_count = shards.max(1);
        let per_shard = capacity.div_ceil(shard_count);

        debug!(shards = shard_count, capacity, "cache store initialized");

        Self {
            shards: (0..shard_count)
                .map(|_| Shard::with_capacity(per_shard))
                .collect(),
            hasher: RandomState::new(),
            stats: StatsRecorder::default(),
        }
    }

    /// Creates a store from the shard and capacity settings in `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::with_shards_and_capacity(config.shards, config.initial_capacity)
    }

    fn shard_for(&self, key: &str) -> &Shard<V> {
        let index = self.hasher.hash_one(key) % self.shards.len() as u64;
        &self.shards[index as usize]
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// Passing `None` as the value is rejected with [`CacheError::NilValue`];
    /// an empty key is rejected with [`CacheError::EmptyKey`]. The key is
    /// checked first. A rejected call does not touch the map.
    ///
    /// Only the outer `None` is the sentinel: for `V = Option<T>`, pass
    /// `Some(None)` to store an inner `None`.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Option<V>>) -> Result<()> {
        let key = key.into();

        if key.is_empty() {
            return Err(self.reject(CacheError::EmptyKey));
        }

        let value: Option<V> = value.into();
        let Some(value) = value else {
            return Err(self.reject(CacheError::NilValue));
        };

        self.shard_for(&key).insert(key, value);
        self.stats.record_set();

        Ok(())
    }

    fn reject(&self, err: CacheError) -> CacheError {
        self.stats.record_rejected();
        trace!(error = %err, "rejected set");
        err
    }

    // == Delete ==
    /// Removes the entry for `key`.
    ///
    /// Returns `true` if an entry was removed, `false` if the key was absent.
    pub fn del(&self, key: &str) -> bool {
        if key.is_empty() {
            return false;
        }

        let removed = self.shard_for(key).remove(key);
        if removed {
            self.stats.record_delete();
        }
        removed
    }

    // == Length ==
    /// Returns the number of entries across all shards.
    ///
    /// Shards are counted one after another, so the total is only exact when
    /// no writer runs concurrently.
    pub fn len(&self) -> usize {
        self.shards.iter().map(Shard::len).sum()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of shards the key space is split across.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.len())
    }
}

impl<V: Clone> CacheStore<V> {
    // == Get ==
    /// Returns a clone of the value stored under `key`, or `None` if absent.
    ///
    /// The empty key is never stored, so it always reports `None`.
    pub fn get(&self, key: &str) -> Option<V> {
        let value = if key.is_empty() {
            None
        } else {
            self.shard_for(key).get(key)
        };

        match value {
            Some(_) => self.stats.record_hit(),
            None => self.stats.record_miss(),
        }
        value
    }
}

impl<V> Default for CacheStore<V> {
    fn default() -> Self {
        Self::new()
    }
}
