//! Property-Based Tests for the response cache store

use proptest::prelude::*;

use crate::cache::{CacheStore, CachedResponse};

const TEST_MAX_ENTRIES: usize = 100;
const TEST_DEFAULT_TTL: u64 = 300;

// == Strategies ==
/// Request paths as the item router sees them
fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..2_000_000).prop_map(|id| format!("/{}", id)),
        (0u32..2_000_000).prop_map(|id| format!("/{}/icon", id)),
        "[a-z]{1,8}".prop_map(|flag| format!("/list/{}", flag)),
    ]
}

fn body_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..512)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, body: Vec<u8> },
    Get { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), body_strategy()).prop_map(|(key, body)| CacheOp::Set { key, body }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Hits and misses add up to exactly the lookups performed.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let mut store = CacheStore::new(TEST_MAX_ENTRIES, TEST_DEFAULT_TTL);
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Set { key, body } => {
                    let _ = store.set(key, CachedResponse::new(None, body), None);
                }
                CacheOp::Get { key } => match store.get(&key) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                },
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.total_entries, store.len());
    }

    // A stored body comes back byte for byte.
    #[test]
    fn prop_roundtrip_body(key in key_strategy(), body in body_strategy()) {
        let mut store = CacheStore::new(TEST_MAX_ENTRIES, TEST_DEFAULT_TTL);
        let value = CachedResponse::new(Some("application/json".to_string()), body);

        store.set(key.clone(), value.clone(), None).unwrap();
        let entry = store.get(&key).unwrap();
        prop_assert_eq!(entry.value, value);
    }

    // The number of entries never exceeds the configured capacity.
    #[test]
    fn prop_capacity_enforcement(
        entries in prop::collection::vec((key_strategy(), body_strategy()), 1..200)
    ) {
        let max_entries = 50;
        let mut store = CacheStore::new(max_entries, TEST_DEFAULT_TTL);

        for (key, body) in entries {
            let _ = store.set(key, CachedResponse::new(None, body), None);
            prop_assert!(store.len() <= max_entries);
        }
    }
}
