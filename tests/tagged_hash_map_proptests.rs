// TaggedHashMap property tests.
//
// Property 1: operation-for-operation parity with std::HashMap on int
//  keys, plus the resize-policy invariants after every step.
//  - Model: HashMap<i64, i64>.
//  - Invariants: len parity, lookup parity, load factor <= 0.75 after
//    every operation, and any automatic shrink lands at or above the
//    20-bucket floor.
//
// Property 2: parity on text keys, exercising the djb2 path and owned
//  string churn through insert/update/remove.
//
// Property 3: a batch insert equals the same pairs inserted one at a
//  time, including duplicate-key resolution.
use proptest::prelude::*;
use std::collections::HashMap;
use tagged_hashmap::{Scalar, ScalarKind, ScalarSlice, TaggedHashMap, MAX_LOAD_FACTOR, SHRINK_FLOOR};

proptest! {
    #[test]
    fn prop_int_parity_with_std(ops in proptest::collection::vec((0u8..=3u8, 0i64..40i64), 1..200)) {
        let mut m = TaggedHashMap::with_bucket_count(ScalarKind::Int, 4).unwrap();
        let mut model: HashMap<i64, i64> = HashMap::new();
        let mut prev_buckets = m.bucket_count();

        for (op, k) in ops {
            match op {
                // Insert or update; the model mirrors both paths.
                0 | 1 => {
                    let prior = m.insert(Scalar::Int(k), Scalar::Int(k * 3)).unwrap();
                    let model_prior = model.insert(k, k * 3);
                    prop_assert_eq!(prior, model_prior.map(Scalar::Int));
                }
                2 => {
                    let removed = m.remove(&Scalar::Int(k)).unwrap();
                    let model_removed = model.remove(&k);
                    prop_assert_eq!(
                        removed,
                        model_removed.map(|v| (Scalar::Int(k), Scalar::Int(v)))
                    );
                }
                3 => {
                    let expected = model.get(&k).map(|&v| Scalar::Int(v));
                    prop_assert_eq!(m.get(&Scalar::Int(k)), expected.as_ref());
                }
                _ => unreachable!(),
            }

            // Resize-policy invariants hold after every operation.
            prop_assert_eq!(m.len(), model.len());
            prop_assert!(m.load_factor() <= MAX_LOAD_FACTOR);
            let buckets = m.bucket_count();
            if buckets < prev_buckets {
                prop_assert!(buckets >= SHRINK_FLOOR);
            }
            prev_buckets = buckets;
        }

        // Final contents parity.
        let mut mine: Vec<i64> = m
            .keys()
            .into_iter()
            .map(|k| match k {
                Scalar::Int(v) => v,
                other => panic!("int table produced {other:?}"),
            })
            .collect();
        let mut expected: Vec<i64> = model.keys().copied().collect();
        mine.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(mine, expected);
    }
}

proptest! {
    #[test]
    fn prop_text_parity_with_std(ops in proptest::collection::vec((0u8..=2u8, 0usize..20usize, 0i64..1000i64), 1..150)) {
        let mut m = TaggedHashMap::with_bucket_count(ScalarKind::Text, 4).unwrap();
        let mut model: HashMap<String, i64> = HashMap::new();

        for (op, raw_k, v) in ops {
            let key = format!("k{raw_k}");
            match op {
                0 => {
                    m.insert(Scalar::from(key.as_str()), Scalar::Int(v)).unwrap();
                    model.insert(key.clone(), v);
                }
                1 => {
                    let removed = m.remove(&Scalar::from(key.as_str())).unwrap();
                    let model_removed = model.remove(&key);
                    prop_assert_eq!(removed.is_some(), model_removed.is_some());
                }
                2 => {
                    prop_assert_eq!(m.contains_key(&Scalar::from(key.as_str())), model.contains_key(&key));
                }
                _ => unreachable!(),
            }
            prop_assert_eq!(m.len(), model.len());
            let expected = model.get(&key).map(|&x| Scalar::Int(x));
            prop_assert_eq!(m.get(&Scalar::from(key.as_str())), expected.as_ref());
        }
    }
}

proptest! {
    #[test]
    fn prop_batch_insert_matches_singles(pairs in proptest::collection::vec((0i64..30i64, -1000i64..1000i64), 1..60)) {
        let keys: Vec<i64> = pairs.iter().map(|(k, _)| *k).collect();
        let values: Vec<i64> = pairs.iter().map(|(_, v)| *v).collect();

        let mut batched = TaggedHashMap::with_bucket_count(ScalarKind::Int, 8).unwrap();
        batched
            .batch_insert(ScalarSlice::Int(&keys), ScalarSlice::Int(&values))
            .unwrap();

        let mut singly = TaggedHashMap::with_bucket_count(ScalarKind::Int, 8).unwrap();
        for (k, v) in &pairs {
            singly.insert(Scalar::Int(*k), Scalar::Int(*v)).unwrap();
        }

        prop_assert_eq!(batched.len(), singly.len());
        for (k, _) in &pairs {
            prop_assert_eq!(batched.get(&Scalar::Int(*k)), singly.get(&Scalar::Int(*k)));
        }
    }
}
