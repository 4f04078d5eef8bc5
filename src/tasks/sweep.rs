//! TTL Sweep Task
//!
//! Background task that eagerly removes expired entries from the in-memory
//! backend. Without it, expired entries linger until their next read; the
//! Redis backend needs no sweep because the server expires entries itself.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::backend::MemoryBackend;

/// Spawns a background task that periodically sweeps expired entries.
///
/// The task loops forever, sleeping for `interval` between sweeps. The
/// returned JoinHandle can be used to abort the task during shutdown.
///
/// # Example
/// ```ignore
/// let backend = MemoryBackend::new();
/// let sweep_handle = spawn_sweep_task(backend.clone(), config.sweep_interval);
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_sweep_task(backend: MemoryBackend, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting TTL sweep task with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = backend.sweep_expired().await;

            if removed > 0 {
                info!("TTL sweep: removed {} expired entries", removed);
            } else {
                debug!("TTL sweep: no expired entries found");
            }
        }
    })
}
