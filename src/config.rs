//! Configuration Module
//!
//! Handles loading and managing cache configuration from environment variables.

use std::env;
use std::time::Duration;

// == Cache Config ==
/// Behavioral configuration for the read-through cache layer.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Default TTL applied when a call does not specify one
    pub default_ttl: Duration,
    /// When true, a `get_or_compute` against an unreachable backend falls
    /// through to the computation instead of failing
    pub degrade_on_unavailable: bool,
    /// Interval between background sweep runs for the in-memory backend
    pub sweep_interval: Duration,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DEFAULT_TTL_SECS` - Default entry TTL in seconds (default: 5)
    /// - `DEGRADE_ON_UNAVAILABLE` - Fall through to computation when the
    ///   backend is down (default: false)
    /// - `SWEEP_INTERVAL_SECS` - Sweep frequency in seconds (default: 1)
    pub fn from_env() -> Self {
        Self {
            default_ttl: Duration::from_secs(
                env::var("DEFAULT_TTL_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(5),
            ),
            degrade_on_unavailable: env::var("DEGRADE_ON_UNAVAILABLE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            sweep_interval: Duration::from_secs(
                env::var("SWEEP_INTERVAL_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(1),
            ),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: Duration::from_secs(5),
            degrade_on_unavailable: false,
            sweep_interval: Duration::from_secs(1),
        }
    }
}

// == Redis Config ==
/// Connection parameters for the Redis backend.
#[derive(Debug, Clone)]
pub struct RedisConfig {
    /// Redis server hostname
    pub host: String,
    /// Redis server port
    pub port: u16,
    /// Optional ACL username
    pub username: Option<String>,
    /// Optional password
    pub password: Option<String>,
    /// Skip the post-connect PING probe. Needed for servers that reject
    /// commands until authentication completes.
    pub skip_ready_check: bool,
    /// Maximum time to wait when establishing the connection
    pub connect_timeout: Duration,
    /// Maximum time allowed for a single get/set/delete
    pub op_timeout: Duration,
}

impl RedisConfig {
    /// Creates a new RedisConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `REDIS_HOST` - Server hostname (default: 127.0.0.1)
    /// - `REDIS_PORT` - Server port (default: 6379)
    /// - `REDIS_USERNAME` - ACL username (default: unset)
    /// - `REDIS_PASSWORD` - Password (default: unset)
    /// - `REDIS_SKIP_READY_CHECK` - Skip the PING probe (default: false)
    /// - `REDIS_CONNECT_TIMEOUT_MS` - Connect timeout in ms (default: 2000)
    /// - `REDIS_OP_TIMEOUT_MS` - Per-operation timeout in ms (default: 1000)
    pub fn from_env() -> Self {
        Self {
            host: env::var("REDIS_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("REDIS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(6379),
            username: env::var("REDIS_USERNAME").ok(),
            password: env::var("REDIS_PASSWORD").ok(),
            skip_ready_check: env::var("REDIS_SKIP_READY_CHECK")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            connect_timeout: Duration::from_millis(
                env::var("REDIS_CONNECT_TIMEOUT_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(2000),
            ),
            op_timeout: Duration::from_millis(
                env::var("REDIS_OP_TIMEOUT_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(1000),
            ),
        }
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 6379,
            username: None,
            password: None,
            skip_ready_check: false,
            connect_timeout: Duration::from_millis(2000),
            op_timeout: Duration::from_millis(1000),
        }
    }
}
