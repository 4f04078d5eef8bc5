//! Tasks Module
//!
//! Background tasks supporting the cache.

mod sweep;

pub use sweep::spawn_sweep_task;
