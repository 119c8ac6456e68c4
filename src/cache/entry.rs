//! Cache Entry Module
//!
//! Defines the structure for individual cached renders. Every entry carries
//! an expiry; there is no "cache forever" mode for rendered pages.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A single cached render result.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The rendered markup
    pub markup: String,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    /// Creates a new cache entry expiring `ttl_seconds` from now.
    pub fn new(markup: String, ttl_seconds: u64) -> Self {
        let now = current_timestamp_ms();

        Self {
            markup,
            created_at: now,
            expires_at: now + ttl_seconds * 1000,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is expired when the current time is
    /// greater than or equal to the expiration time, so a fully elapsed TTL
    /// means the entry is immediately unusable.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, 0 once expired.
    pub fn ttl_remaining_ms(&self) -> u64 {
        let now = current_timestamp_ms();
        self.expires_at.saturating_sub(now)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
