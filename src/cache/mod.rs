//! Cache Module
//!
//! The typed read-through layer: get/set/delete with TTL expiration,
//! read-through fills, deterministic key derivation, and hit/miss statistics.

mod key;
mod readthrough;
mod stats;


// Re-export public types
pub use key::derive_key;
pub use readthrough::Cache;
pub use stats::{CacheStats, StatsSnapshot};
