//! Backend Module
//!
//! Defines the pluggable storage contract for cache entries and its two
//! implementations: a process-local in-memory map and a networked Redis store.

mod entry;
mod memory;
mod redis;

use async_trait::async_trait;
use std::time::Duration;

use crate::error::Result;

// Re-export public types
pub use entry::CacheEntry;
pub use memory::MemoryBackend;
pub use redis::RedisBackend;

// == Cache Backend Trait ==
/// Physical storage for cache entries.
///
/// Implementations own TTL enforcement: a `get` on an entry whose TTL has
/// elapsed must behave exactly like a `get` on a key that was never set.
/// Values are opaque serialized bytes; typing belongs to the cache layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Looks up `key`. Returns `Ok(None)` for absent or expired entries.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Stores `value` under `key`, expiring `ttl` from now. Replaces any
    /// prior entry for the same key.
    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<()>;

    /// Removes the entry if present; a no-op when absent.
    async fn delete(&self, key: &str) -> Result<()>;
}
