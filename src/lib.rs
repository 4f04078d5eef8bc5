//! Readthru - a read-through cache with pluggable backends
//!
//! Provides typed get/set/delete with TTL expiration over either an
//! in-memory map or a Redis server, plus the read-through `get_or_compute`
//! pattern for memoizing expensive calls.

pub mod backend;
pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use backend::{CacheBackend, MemoryBackend, RedisBackend};
pub use cache::{derive_key, Cache, StatsSnapshot};
pub use config::{CacheConfig, RedisConfig};
pub use error::{CacheError, Result};
pub use tasks::spawn_sweep_task;
