//! Read-Through Cache Module
//!
//! The typed cache layer over a pluggable backend. Values cross the backend
//! boundary as serialized JSON bytes; typing happens here, at the edge, via
//! an explicit encode on write and decode on read.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::backend::CacheBackend;
use crate::cache::{CacheStats, StatsSnapshot};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

// == Cache ==
/// Read-through cache over a [`CacheBackend`].
///
/// Built once at process start and passed explicitly to whatever needs it;
/// cloning shares the backend and counters.
#[derive(Clone)]
pub struct Cache {
    backend: Arc<dyn CacheBackend>,
    default_ttl: Duration,
    degrade_on_unavailable: bool,
    stats: Arc<CacheStats>,
}

impl Cache {
    // == Constructor ==
    /// Creates a cache over `backend` with behavior taken from `config`.
    pub fn new(backend: Arc<dyn CacheBackend>, config: &CacheConfig) -> Self {
        Self {
            backend,
            default_ttl: config.default_ttl,
            degrade_on_unavailable: config.degrade_on_unavailable,
            stats: Arc::new(CacheStats::new()),
        }
    }

    // == Get ==
    /// Looks up `key` and decodes the stored value.
    ///
    /// Absence is a normal outcome: `Ok(None)` covers never-set, deleted,
    /// and expired keys alike. A value that fails to decode reports a
    /// `Serialization` error, distinct from the backend being down.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.backend.get(key).await? {
            Some(bytes) => {
                let value = serde_json::from_slice(&bytes)?;
                self.stats.record_hit();
                debug!(key, "Cache hit");
                Ok(Some(value))
            }
            None => {
                self.stats.record_miss();
                debug!(key, "Cache miss");
                Ok(None)
            }
        }
    }

    // == Set ==
    /// Encodes `value` and stores it under `key`, expiring `ttl` from now.
    ///
    /// A `None` TTL falls back to the configured default. Overwrites any
    /// prior entry for the same key, value and expiration both.
    pub async fn set<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
        ttl: Option<Duration>,
    ) -> Result<()> {
        let bytes = serde_json::to_vec(value)?;
        let ttl = ttl.unwrap_or(self.default_ttl);
        self.backend.set(key, bytes, ttl).await
    }

    // == Delete ==
    /// Removes the entry for `key` if present; a no-op when absent.
    pub async fn delete(&self, key: &str) -> Result<()> {
        self.backend.delete(key).await
    }

    // == Get Or Compute ==
    /// The read-through pattern: returns the cached value on a hit without
    /// invoking `compute`; on a miss invokes `compute`, persists its result,
    /// then returns it.
    ///
    /// When `degrade_on_unavailable` is enabled, an unreachable backend is
    /// treated as a miss and the computed result is returned WITHOUT being
    /// persisted; when disabled, `BackendUnavailable` propagates to the
    /// caller. `Serialization` errors propagate either way, since a cache
    /// returning garbage is not the same as a cache being down.
    pub async fn get_or_compute<T, F, Fut>(
        &self,
        key: &str,
        ttl: Option<Duration>,
        compute: F,
    ) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = anyhow::Result<T>>,
    {
        let mut persist = true;
        match self.get::<T>(key).await {
            Ok(Some(value)) => return Ok(value),
            Ok(None) => {}
            Err(CacheError::BackendUnavailable(reason)) if self.degrade_on_unavailable => {
                warn!(key, %reason, "Backend unavailable on read, degrading to direct computation");
                persist = false;
            }
            Err(err) => return Err(err),
        }

        let value = compute().await.map_err(CacheError::Compute)?;

        if persist {
            match self.set(key, &value, ttl).await {
                Ok(()) => {
                    self.stats.record_fill();
                    return Ok(value);
                }
                Err(CacheError::BackendUnavailable(reason)) if self.degrade_on_unavailable => {
                    warn!(key, %reason, "Backend unavailable on write, returning uncached result");
                }
                Err(err) => return Err(err),
            }
        }

        self.stats.record_degraded();
        Ok(value)
    }

    // == Stats ==
    /// Returns a snapshot of the hit/miss/fill/degraded counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    // == Default TTL ==
    /// The TTL applied when a call does not specify one.
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }
}
