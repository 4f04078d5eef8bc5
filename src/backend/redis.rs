//! Redis Backend Module
//!
//! Networked storage backend over the redis crate's async ConnectionManager.
//! Entries persist across process restarts and expire server-side with
//! millisecond precision, so a `get` after the TTL reads as absent without
//! any client-side bookkeeping.

use std::future::Future;
use std::time::Duration;

use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, ConnectionAddr, ConnectionInfo, RedisConnectionInfo};
use tokio::time::timeout;
use tracing::info;

use crate::backend::CacheBackend;
use crate::config::RedisConfig;
use crate::error::{CacheError, Result};

// == Redis Backend ==
/// Redis-backed cache storage.
///
/// The connection is established once via [`RedisBackend::connect`] and
/// shared across all operations; the manager reconnects on its own after
/// transient failures. Dropping the backend releases the connection.
pub struct RedisBackend {
    manager: ConnectionManager,
    op_timeout: Duration,
}

impl RedisBackend {
    // == Connect ==
    /// Establishes the shared connection described by `config`.
    ///
    /// Unless `skip_ready_check` is set, a PING probe verifies the server
    /// actually accepts commands before the backend is handed out. Servers
    /// that reject commands until authentication completes need the check
    /// skipped.
    pub async fn connect(config: &RedisConfig) -> Result<Self> {
        let info = ConnectionInfo {
            addr: ConnectionAddr::Tcp(config.host.clone(), config.port),
            redis: RedisConnectionInfo {
                username: config.username.clone(),
                password: config.password.clone(),
                ..Default::default()
            },
        };

        let client = Client::open(info)?;
        let manager = match timeout(config.connect_timeout, ConnectionManager::new(client)).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(CacheError::BackendUnavailable(format!(
                    "connect to {}:{} timed out after {}ms",
                    config.host,
                    config.port,
                    config.connect_timeout.as_millis()
                )))
            }
        };

        let backend = Self {
            manager,
            op_timeout: config.op_timeout,
        };

        if !config.skip_ready_check {
            backend.ping().await?;
        }

        info!(host = %config.host, port = config.port, "Connected to Redis backend");
        Ok(backend)
    }

    // == Ping ==
    /// Round-trips a PING to verify the server is reachable and authenticated.
    pub async fn ping(&self) -> Result<()> {
        let mut con = self.manager.clone();
        let _: String = self
            .bounded(async move { redis::cmd("PING").query_async(&mut con).await })
            .await?;
        Ok(())
    }

    /// Runs a backend operation under the configured timeout, mapping both
    /// timeouts and protocol errors to `BackendUnavailable`.
    async fn bounded<T>(&self, op: impl Future<Output = redis::RedisResult<T>>) -> Result<T> {
        match timeout(self.op_timeout, op).await {
            Ok(result) => result.map_err(CacheError::from),
            Err(_) => Err(CacheError::BackendUnavailable(format!(
                "operation timed out after {}ms",
                self.op_timeout.as_millis()
            ))),
        }
    }
}

#[async_trait::async_trait]
impl CacheBackend for RedisBackend {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut con = self.manager.clone();
        let value: Option<Vec<u8>> = self.bounded(con.get(key)).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<()> {
        let mut con = self.manager.clone();
        // Redis rejects a zero expiry; clamp to the shortest it accepts
        let ttl_ms = ttl.as_millis().max(1) as u64;
        let _: () = self.bounded(con.pset_ex(key, value, ttl_ms)).await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut con = self.manager.clone();
        let _: () = self.bounded(con.del(key)).await?;
        Ok(())
    }
}
