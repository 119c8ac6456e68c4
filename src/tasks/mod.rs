//! Background Tasks Module
//!
//! Periodic jobs running alongside the server.
//!
//! # Tasks
//! - Expiry sweep: purges expired cached renders at configured intervals

mod sweep;

pub use sweep::spawn_sweep_task;
