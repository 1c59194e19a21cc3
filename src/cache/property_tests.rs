//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check capacity, expiry, deletion and eviction behaviour.

use proptest::prelude::*;
use std::collections::HashSet;

use crate::cache::{CacheStore, ManualClock};

// == Test Configuration ==
const TEST_DEFAULT_TTL: u64 = 60_000;
const START_MS: u64 = 1_700_000_000_000;

fn test_store(max_size: usize) -> (CacheStore<String, ManualClock>, ManualClock) {
    let clock = ManualClock::new(START_MS);
    (
        CacheStore::with_clock(max_size, TEST_DEFAULT_TTL, clock.clone()),
        clock,
    )
}

// == Strategies ==
/// Generates cache keys
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_:]{1,32}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,64}"
}

/// Generates a sequence of cache operations for testing
#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: String, ttl: Option<u64> },
    Get { key: String },
    Has { key: String },
    Delete { key: String },
    Advance { ms: u64 },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        3 => (key_strategy(), value_strategy(), prop::option::of(1u64..5_000))
            .prop_map(|(key, value, ttl)| CacheOp::Set { key, value, ttl }),
        2 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        1 => key_strategy().prop_map(|key| CacheOp::Has { key }),
        1 => key_strategy().prop_map(|key| CacheOp::Delete { key }),
        1 => (0u64..3_000).prop_map(|ms| CacheOp::Advance { ms }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Resident count never exceeds max_size after any set, whatever else happens.
    #[test]
    fn prop_capacity_bound(
        max_size in 1usize..20,
        ops in prop::collection::vec(cache_op_strategy(), 1..200)
    ) {
        let (mut store, clock) = test_store(max_size);

        for op in ops {
            match op {
                CacheOp::Set { key, value, ttl } => {
                    store.set(key, value, ttl);
                    prop_assert!(
                        store.len() <= max_size,
                        "Cache size {} exceeds max {}",
                        store.len(),
                        max_size
                    );
                }
                CacheOp::Get { key } => { store.get(&key); }
                CacheOp::Has { key } => { store.has(&key); }
                CacheOp::Delete { key } => { store.delete(&key); }
                CacheOp::Advance { ms } => clock.advance(ms),
            }
        }
    }

    // An entry with TTL T is served at T - eps and gone at T + eps.
    #[test]
    fn prop_ttl_expiry(
        key in key_strategy(),
        value in value_strategy(),
        ttl in 2u64..100_000,
        eps in 1u64..1_000
    ) {
        let eps = eps.min(ttl - 1);
        let (mut store, clock) = test_store(10);

        store.set(key.clone(), value.clone(), Some(ttl));

        clock.advance(ttl - eps);
        prop_assert_eq!(store.get(&key), Some(value));

        clock.advance(2 * eps);
        prop_assert_eq!(store.get(&key), None);
        prop_assert_eq!(store.len(), 0);
    }

    // Deleting an absent key is false every time and changes nothing.
    #[test]
    fn prop_delete_absent_is_idempotent(
        present in prop::collection::hash_set(key_strategy(), 0..10),
        absent in key_strategy(),
        repeats in 1usize..10
    ) {
        prop_assume!(!present.contains(&absent));
        let (mut store, _) = test_store(64);
        for key in &present {
            store.set(key.clone(), "v".to_string(), None);
        }
        let before = store.stats();

        for _ in 0..repeats {
            prop_assert!(!store.delete(&absent));
        }

        prop_assert_eq!(store.stats(), before);
        for key in &present {
            prop_assert!(store.has(key));
        }
    }

    // After N reads an entry has hit count N, and it outlives a less-read rival.
    #[test]
    fn prop_hit_counting_orders_eviction(
        more in 1u64..20,
        less in 0u64..20,
        rival_first in any::<bool>()
    ) {
        prop_assume!(less < more);
        let (mut store, _) = test_store(2);
        let (first, second) = if rival_first { ("rival", "busy") } else { ("busy", "rival") };

        store.set(first, "1".to_string(), None);
        store.set(second, "2".to_string(), None);
        for _ in 0..more {
            store.get("busy");
        }
        for _ in 0..less {
            store.get("rival");
        }
        prop_assert_eq!(store.hit_count("busy"), Some(more));
        prop_assert_eq!(store.hit_count("rival"), Some(less));

        store.set("newcomer", "3".to_string(), None);

        prop_assert!(store.has("busy"));
        prop_assert!(!store.has("rival"));
        prop_assert!(store.has("newcomer"));
    }

    // With equal hits, the earliest inserted key is evicted.
    #[test]
    fn prop_tie_evicts_earliest(
        keys in prop::collection::vec(key_strategy(), 2..10),
        newcomer in key_strategy()
    ) {
        let mut seen = HashSet::new();
        let unique: Vec<String> = keys.into_iter().filter(|k| seen.insert(k.clone())).collect();
        prop_assume!(unique.len() >= 2);
        prop_assume!(!unique.contains(&newcomer));

        let (mut store, _) = test_store(unique.len());
        for key in &unique {
            store.set(key.clone(), "v".to_string(), None);
        }

        store.set(newcomer.clone(), "n".to_string(), None);

        prop_assert_eq!(store.len(), unique.len());
        prop_assert!(!store.has(&unique[0]));
        for key in unique.iter().skip(1) {
            prop_assert!(store.has(key), "Key '{}' should have survived", key);
        }
        prop_assert!(store.has(&newcomer));
    }

    // Request counters match what the caller observed.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..100)) {
        let (mut store, clock) = test_store(16);
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Set { key, value, ttl } => store.set(key, value, ttl),
                CacheOp::Get { key } => match store.get(&key) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                },
                CacheOp::Has { key } => { store.has(&key); }
                CacheOp::Delete { key } => { store.delete(&key); }
                CacheOp::Advance { ms } => clock.advance(ms),
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.size, store.len());
    }
}

// == Scenarios ==
#[test]
fn test_eviction_preference_scenario() {
    let (mut store, _) = test_store(2);

    store.set("A", "a".to_string(), None);
    store.set("B", "b".to_string(), None);
    for _ in 0..5 {
        assert!(store.get("A").is_some());
    }

    store.set("C", "c".to_string(), None);

    assert!(store.has("A"));
    assert!(!store.has("B"));
    assert!(store.has("C"));
}

#[test]
fn test_expiry_scenario() {
    let clock = ManualClock::new(START_MS);
    let mut store: CacheStore<i64, ManualClock> = CacheStore::with_clock(2, 1_000, clock.clone());

    store.set("x", 42, None);
    assert_eq!(store.get("x"), Some(42));

    clock.advance(1_100);

    assert_eq!(store.get("x"), None);
    assert_eq!(store.stats().size, 0);
}
