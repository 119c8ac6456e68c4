//! LRU Tracker Module
//!
//! Tracks access recency of cached request paths for eviction.

use std::collections::VecDeque;

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Paths are stored in a VecDeque where:
/// - Front = Most recently used
/// - Back = Least recently used
#[derive(Debug, Default)]
pub struct LruTracker {
    /// Order of paths by access time
    order: VecDeque<String>,
}

impl LruTracker {
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Touch ==
    /// Marks a path as recently used (moves to front).
    ///
    /// If the path is already tracked it is removed first, so a path appears
    /// at most once.
    pub fn touch(&mut self, path: &str) {
        self.remove(path);
        self.order.push_front(path.to_string());
    }

    // == Remove ==
    /// Removes a path from the tracker.
    pub fn remove(&mut self, path: &str) {
        self.order.retain(|p| p != path);
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used path.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        self.order.pop_back()
    }

    // == Peek Oldest ==
    /// Returns the least recently used path without removing it.
    pub fn peek_oldest(&self) -> Option<&String> {
        self.order.back()
    }

    /// Returns the number of tracked paths.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Checks if a path is being tracked.
    pub fn contains(&self, path: &str) -> bool {
        self.order.iter().any(|p| p == path)
    }
}
