//! Error types for the cache store
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Validation failures reported by `set`.
///
/// Both variants are raised before any mutation, so a failed call leaves the
/// store exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheError {
    /// The supplied key was the empty string
    #[error("empty key not allowed")]
    EmptyKey,

    /// The supplied value was `None`
    #[error("nil value not allowed")]
    NilValue,
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
