//! Dynamically typed values
//!
//! Lets one store hold strings, integers and structs side by side, with the
//! reader downcasting to the type it expects.

use std::any::Any;
use std::sync::Arc;

use crate::cache::CacheStore;
use crate::error::Result;

/// Shared, type-erased payload.
pub type DynValue = Arc<dyn Any + Send + Sync>;

/// Store holding heterogeneous values.
pub type AnyCache = CacheStore<DynValue>;

impl CacheStore<DynValue> {
    /// Wraps `value` and stores it under `key`.
    pub fn set_value<T>(&self, key: impl Into<String>, value: T) -> Result<()>
    where
        T: Any + Send + Sync,
    {
        self.set(key, Arc::new(value) as DynValue)
    }

    /// Returns the value under `key` if it is present and of type `T`.
    ///
    /// A present value of another type reads as `None`.
    pub fn get_as<T>(&self, key: &str) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        self.get(key)?.downcast::<T>().ok()
    }
}
