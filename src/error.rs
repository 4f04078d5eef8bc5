//! Error types for the read-through cache
//!
//! Provides unified error handling using thiserror.
//!
//! A cache miss is deliberately NOT part of this enum: absence (never set,
//! deleted, or expired) is a normal outcome and surfaces as `Ok(None)`.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache operations.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The storage backend cannot be reached, authenticated, or timed out
    #[error("backend unavailable: {0}")]
    BackendUnavailable(String),

    /// A value could not be encoded for storage or decoded on read
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The caller-supplied computation in a read-through fill failed
    #[error("computation failed: {0}")]
    Compute(#[source] anyhow::Error),
}

impl From<redis::RedisError> for CacheError {
    fn from(err: redis::RedisError) -> Self {
        CacheError::BackendUnavailable(err.to_string())
    }
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
