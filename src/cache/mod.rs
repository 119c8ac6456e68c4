//! Render Cache Module
//!
//! In-memory cache of rendered markup keyed by request URL, with per-entry
//! TTL expiration and LRU eviction.

mod entry;
mod lru;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::RenderCache;

// == Public Constants ==
/// Maximum allowed cache key (request path) length in bytes
pub const MAX_PATH_LENGTH: usize = 2048;

/// Maximum allowed rendered markup size in bytes
pub const MAX_MARKUP_SIZE: usize = 4 * 1024 * 1024; // 4 MB
