//! In-Memory Backend Module
//!
//! Process-local storage backend. Entries live in a HashMap behind an async
//! RwLock and are lost on restart. Expired entries are dropped lazily on
//! read, or eagerly by the sweep task (see `tasks::spawn_sweep_task`).

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::backend::{CacheBackend, CacheEntry};
use crate::error::Result;

// == Memory Backend ==
/// In-memory cache backend.
///
/// Cloning is cheap and shares the same underlying map, so a clone can be
/// handed to the sweep task while the cache keeps its own handle.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

impl MemoryBackend {
    // == Constructor ==
    /// Creates an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    // == Sweep Expired ==
    /// Removes all expired entries.
    ///
    /// Returns the number of entries removed.
    pub async fn sweep_expired(&self) -> usize {
        let mut entries = self.entries.write().await;

        let expired_keys: Vec<String> = entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();
        for key in expired_keys {
            entries.remove(&key);
        }

        count
    }

    // == Length ==
    /// Returns the current number of entries, including not-yet-swept
    /// expired ones.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if the backend holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl CacheBackend for MemoryBackend {
    /// Retrieves the value bytes for `key`.
    ///
    /// An expired entry is removed on the spot and reported as absent, so
    /// callers cannot distinguish "expired" from "never set".
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        // Write lock up front: an expired hit mutates the map
        let mut entries = self.entries.write().await;

        match entries.get(key) {
            Some(entry) if entry.is_expired() => {
                entries.remove(key);
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value.clone())),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), CacheEntry::new(value, ttl));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        Ok(())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_backend_new() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.len().await, 0);
        assert!(backend.is_empty().await);
    }

    #[tokio::test]
    async fn test_backend_set_and_get() {
        let backend = MemoryBackend::new();

        backend
            .set("key1", b"value1".to_vec(), Duration::from_secs(60))
            .await
            .unwrap();
        let value = backend.get("key1").await.unwrap();

        assert_eq!(value, Some(b"value1".to_vec()));
        assert_eq!(backend.len().await, 1);
    }

    #[tokio::test]
    async fn test_backend_get_nonexistent() {
        let backend = MemoryBackend::new();

        let value = backend.get("nonexistent").await.unwrap();
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn test_backend_delete() {
        let backend = MemoryBackend::new();

        backend
            .set("key1", b"value1".to_vec(), Duration::from_secs(60))
            .await
            .unwrap();
        backend.delete("key1").await.unwrap();

        assert!(backend.is_empty().await);
        assert_eq!(backend.get("key1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_backend_delete_nonexistent_is_noop() {
        let backend = MemoryBackend::new();

        let result = backend.delete("nonexistent").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_backend_overwrite() {
        let backend = MemoryBackend::new();

        backend
            .set("key1", b"value1".to_vec(), Duration::from_secs(60))
            .await
            .unwrap();
        backend
            .set("key1", b"value2".to_vec(), Duration::from_secs(60))
            .await
            .unwrap();

        let value = backend.get("key1").await.unwrap();
        assert_eq!(value, Some(b"value2".to_vec()));
        assert_eq!(backend.len().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_backend_ttl_expiration() {
        let backend = MemoryBackend::new();

        backend
            .set("key1", b"value1".to_vec(), Duration::from_secs(1))
            .await
            .unwrap();

        // Accessible immediately
        assert!(backend.get("key1").await.unwrap().is_some());

        // Advance past the TTL
        tokio::time::advance(Duration::from_millis(1100)).await;

        // Expired entry reads as absent and is removed
        assert_eq!(backend.get("key1").await.unwrap(), None);
        assert!(backend.is_empty().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_backend_overwrite_resets_ttl() {
        let backend = MemoryBackend::new();

        backend
            .set("key1", b"value1".to_vec(), Duration::from_secs(1))
            .await
            .unwrap();

        tokio::time::advance(Duration::from_millis(900)).await;

        // Overwrite just before expiry with a fresh TTL
        backend
            .set("key1", b"value2".to_vec(), Duration::from_secs(10))
            .await
            .unwrap();

        tokio::time::advance(Duration::from_millis(500)).await;

        // Old deadline has passed but the rewritten entry is still live
        assert_eq!(backend.get("key1").await.unwrap(), Some(b"value2".to_vec()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_backend_sweep_expired() {
        let backend = MemoryBackend::new();

        backend
            .set("key1", b"value1".to_vec(), Duration::from_secs(1))
            .await
            .unwrap();
        backend
            .set("key2", b"value2".to_vec(), Duration::from_secs(10))
            .await
            .unwrap();

        tokio::time::advance(Duration::from_millis(1100)).await;

        let removed = backend.sweep_expired().await;
        assert_eq!(removed, 1);
        assert_eq!(backend.len().await, 1);
        assert!(backend.get("key2").await.unwrap().is_some());
    }
}
