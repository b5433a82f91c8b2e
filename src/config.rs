//! Configuration Module
//!
//! Handles loading cache and process settings from environment variables.

use std::env;

use crate::cache::DEFAULT_SHARDS;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of lock-guarded shards the key space is split across
    pub shards: usize,
    /// Entry slots to pre-allocate, spread evenly over the shards
    pub initial_capacity: usize,
    /// Seconds between periodic stats log lines, 0 disables reporting
    pub stats_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_SHARDS` - Shard count (default: 16)
    /// - `CACHE_INITIAL_CAPACITY` - Pre-allocated entries (default: 0)
    /// - `STATS_INTERVAL` - Stats log frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            shards: parse_var("CACHE_SHARDS").unwrap_or(defaults.shards),
            initial_capacity: parse_var("CACHE_INITIAL_CAPACITY")
                .unwrap_or(defaults.initial_capacity),
            stats_interval: parse_var("STATS_INTERVAL").unwrap_or(defaults.stats_interval),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shards: DEFAULT_SHARDS,
            initial_capacity: 0,
            stats_interval: 60,
        }
    }
}
