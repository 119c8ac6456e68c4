//! Render Cache Store
//!
//! Main cache engine combining HashMap storage with LRU tracking and TTL
//! expiration. Keys are request URLs, values are rendered markup.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats, LruTracker, MAX_MARKUP_SIZE, MAX_PATH_LENGTH};
use crate::error::CacheError;

// == Render Cache ==
/// Bounded in-memory store of rendered pages with LRU eviction and TTL.
#[derive(Debug)]
pub struct RenderCache {
    /// Path-to-markup storage
    entries: HashMap<String, CacheEntry>,
    /// LRU access tracker
    lru: LruTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
}

impl RenderCache {
    /// Creates a new RenderCache holding at most `max_entries` renders.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_entries,
        }
    }

    // == Get ==
    /// Looks up cached markup for a request path.
    ///
    /// Returns `Ok(None)` for a path that was never stored or whose entry
    /// has expired; absence is not an error. Expired entries are removed
    /// lazily on read. A hit refreshes the entry's LRU position.
    pub fn get(&mut self, path: &str) -> Result<Option<String>, CacheError> {
        if let Some(entry) = self.entries.get(path) {
            if entry.is_expired() {
                self.entries.remove(path);
                self.lru.remove(path);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_miss();
                return Ok(None);
            }

            let markup = entry.markup.clone();
            self.stats.record_hit();
            self.lru.touch(path);
            Ok(Some(markup))
        } else {
            self.stats.record_miss();
            Ok(None)
        }
    }

    // == Set ==
    /// Stores rendered markup under a request path, expiring after
    /// `ttl_seconds`.
    ///
    /// Re-setting an existing path replaces the markup and resets its
    /// expiry. When at capacity the least recently used entry is evicted
    /// to admit a new path. Failures are recorded in the stats and must be
    /// treated as best-effort by callers.
    pub fn set(&mut self, path: String, markup: String, ttl_seconds: u64) -> Result<(), CacheError> {
        if path.len() > MAX_PATH_LENGTH {
            self.stats.record_store_failure();
            return Err(CacheError::KeyTooLong(path.len()));
        }

        if markup.len() > MAX_MARKUP_SIZE {
            self.stats.record_store_failure();
            return Err(CacheError::MarkupTooLarge {
                size: markup.len(),
                limit: MAX_MARKUP_SIZE,
            });
        }

        let is_replace = self.entries.contains_key(&path);

        // Admitting a new path at capacity requires evicting the LRU entry
        if !is_replace && self.entries.len() >= self.max_entries {
            if let Some(evicted_path) = self.lru.evict_oldest() {
                self.entries.remove(&evicted_path);
                self.stats.record_eviction();
            } else {
                self.stats.record_store_failure();
                return Err(CacheError::Unavailable(
                    "cache is full and eviction failed".to_string(),
                ));
            }
        }

        let entry = CacheEntry::new(markup, ttl_seconds);
        self.entries.insert(path.clone(), entry);

        // Touch moves the path to the most-recently-used position
        self.lru.touch(&path);

        self.stats.set_total_entries(self.entries.len());

        Ok(())
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed. Lazy expiry on read makes this
    /// optional for correctness; the background sweep keeps memory in check.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_paths: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(path, _)| path.clone())
            .collect();

        let count = expired_paths.len();

        for path in expired_paths {
            self.entries.remove(&path);
            self.lru.remove(&path);
        }

        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Returns the current number of cached renders.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remaining TTL in milliseconds for a path, if present.
    ///
    /// Observability helper; does not touch LRU order or stats.
    pub fn ttl_remaining_ms(&self, path: &str) -> Option<u64> {
        self.entries.get(path).map(CacheEntry::ttl_remaining_ms)
    }
}
