//! Property-Based Tests for the Render Cache
//!
//! Uses proptest to verify the cache invariants under arbitrary operation
//! sequences.

use proptest::prelude::*;

use crate::cache::RenderCache;

// == Test Configuration ==
const TEST_MAX_ENTRIES: usize = 10;
const TEST_TTL: u64 = 300;

// == Strategies ==
/// Generates request-path-shaped cache keys
fn path_strategy() -> impl Strategy<Value = String> {
    "/[a-z0-9/-]{0,24}".prop_map(|s| s)
}

/// Generates small markup payloads
fn markup_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 <>/]{1,128}".prop_map(|s| s)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { path: String, markup: String },
    Get { path: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (path_strategy(), markup_strategy())
            .prop_map(|(path, markup)| CacheOp::Set { path, markup }),
        path_strategy().prop_map(|path| CacheOp::Get { path }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // The entry count never exceeds the configured maximum, no matter how
    // many distinct paths are stored.
    #[test]
    fn prop_size_bound_holds(ops in prop::collection::vec(cache_op_strategy(), 1..100)) {
        let mut cache = RenderCache::new(TEST_MAX_ENTRIES);

        for op in ops {
            match op {
                CacheOp::Set { path, markup } => {
                    let _ = cache.set(path, markup, TEST_TTL);
                }
                CacheOp::Get { path } => {
                    let _ = cache.get(&path);
                }
            }
            prop_assert!(cache.len() <= TEST_MAX_ENTRIES, "Size bound violated");
        }
    }

    // Hit and miss counters reflect exactly the lookups that occurred.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let mut cache = RenderCache::new(TEST_MAX_ENTRIES);
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Set { path, markup } => {
                    let _ = cache.set(path, markup, TEST_TTL);
                }
                CacheOp::Get { path } => {
                    match cache.get(&path).unwrap() {
                        Some(_) => expected_hits += 1,
                        None => expected_misses += 1,
                    }
                }
            }
        }

        let stats = cache.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.total_entries, cache.len(), "Total entries mismatch");
    }

    // A freshly stored path is always retrievable with the stored markup
    // (TTL far in the future, no interleaved eviction pressure).
    #[test]
    fn prop_last_write_wins(path in path_strategy(),
                            first in markup_strategy(),
                            second in markup_strategy()) {
        let mut cache = RenderCache::new(TEST_MAX_ENTRIES);

        cache.set(path.clone(), first, TEST_TTL).unwrap();
        cache.set(path.clone(), second.clone(), TEST_TTL).unwrap();

        let markup = cache.get(&path).unwrap();
        prop_assert_eq!(markup, Some(second));
        prop_assert_eq!(cache.len(), 1);
    }
}
