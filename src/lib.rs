//! SSR Gateway - a server-side-rendering front server
//!
//! Sits in front of an opaque rendering engine, serves the static browser
//! bundle, and keeps a short-lived in-memory render cache keyed by request
//! URL. The library exposes pure constructors so the router can be built
//! without binding a port; only the binary entry point starts a listener.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod server;
pub mod tasks;

pub use cache::RenderCache;
pub use config::Config;
pub use render::{RenderRequest, Renderer};
pub use server::{create_router, AppState};
pub use tasks::spawn_sweep_task;
