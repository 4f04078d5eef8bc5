//! Cache Entry Module
//!
//! Defines the structure for individual in-memory cache entries with TTL support.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// Represents a single cache entry holding serialized value bytes and metadata.
///
/// Uses `tokio::time::Instant` so expiration follows the runtime clock and
/// tests can advance time without sleeping.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value, already serialized by the cache layer
    pub value: Vec<u8>,
    /// When the entry was written
    pub stored_at: Instant,
    /// When the entry stops being valid
    pub expires_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl` from now.
    pub fn new(value: Vec<u8>, ttl: Duration) -> Self {
        let now = Instant::now();
        Self {
            value,
            stored_at: now,
            expires_at: now + ttl,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is considered expired when the current
    /// time is greater than or equal to the expiration time, so an entry is
    /// invalid the instant its TTL has fully elapsed.
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    // == Time To Live ==
    /// Returns the remaining TTL, or `Duration::ZERO` if the entry has expired.
    ///
    /// Useful for debugging and statistics.
    pub fn ttl_remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }
}
