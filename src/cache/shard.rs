//! Cache Shard Module
//!
//! One lock-guarded slice of the key space.

use std::collections::HashMap;

use parking_lot::RwLock;

// == Shard ==
/// A single partition of the store.
///
/// Writers hold the exclusive lock for the whole insert/remove, readers share
/// the lock, so any key living in this shard is linearizable.
#[derive(Debug)]
pub(crate) struct Shard<V> {
    entries: RwLock<HashMap<String, V>>,
}

impl<V> Shard<V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    /// Inserts or replaces the value for `key`.
    pub(crate) fn insert(&self, key: String, value: V) {
        self.entries.write().insert(key, value);
    }

    /// Removes `key`, returning whether an entry was present.
    pub(crate) fn remove(&self, key: &str) -> bool {
        self.entries.write().remove(key).is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.read().len()
    }
}

impl<V: Clone> Shard<V> {
    /// Clones the value for `key` out from under the read lock.
    pub(crate) fn get(&self, key: &str) -> Option<V> {
        self.entries.read().get(key).cloned()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shard_insert_get_remove() {
        let shard = Shard::with_capacity(4);

        shard.insert("a".to_string(), 1);
        assert_eq!(shard.get("a"), Some(1));
        assert_eq!(shard.len(), 1);

        assert!(shard.remove("a"));
        assert!(!shard.remove("a"));
        assert_eq!(shard.get("a"), None);
        assert_eq!(shard.len(), 0);
    }

    #[test]
    fn test_shard_insert_replaces() {
        let shard = Shard::with_capacity(0);

        shard.insert("k".to_string(), "v1");
        shard.insert("k".to_string(), "v2");

        assert_eq!(shard.get("k"), Some("v2"));
        assert_eq!(shard.len(), 1);
    }
}
