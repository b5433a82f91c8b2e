//! Cache capability interface
//!
//! The narrow surface other components depend on instead of a concrete store.

use crate::cache::CacheStore;
use crate::error::Result;

// == Cache Trait ==
/// Set/Get/Del capability over string keys.
///
/// Object safe, so callers can hold an `Arc<dyn Cache<V>>`. `None` is the
/// absence-of-value sentinel and is never storable.
pub trait Cache<V>: Send + Sync {
    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: Option<V>) -> Result<()>;

    /// Returns the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Option<V>;

    /// Removes `key`, returning whether an entry was present.
    fn del(&self, key: &str) -> bool;
}

impl<V> Cache<V> for CacheStore<V>
where
    V: Clone + Send + Sync,
{
    fn set(&self, key: &str, value: Option<V>) -> Result<()> {
        CacheStore::set(self, key, value)
    }

    fn get(&self, key: &str) -> Option<V> {
        CacheStore::get(self, key)
    }

    fn del(&self, key: &str) -> bool {
        CacheStore::del(self, key)
    }
}
