//! End-to-end behavior of the filter against its stated guarantees.

use bloomsieve::{BloomFilter, FilterBuilder, FilterError};
use proptest::prelude::*;
use rand::distributions::Alphanumeric;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

#[test]
fn test_basic_insert_and_find() {
    let mut filter = BloomFilter::new(100, 0.01).unwrap();

    filter.insert("test-item").unwrap();

    assert!(
        filter.contains("test-item").unwrap(),
        "Should find the item we just added"
    );
}

#[test]
fn test_end_to_end_scenario() {
    let mut filter = BloomFilter::new(1000, 0.01).unwrap();

    for fruit in ["apple", "banana", "cherry"] {
        filter.insert(fruit).unwrap();
    }

    assert!(filter.contains("apple").unwrap());
    assert!(filter.contains("banana").unwrap());
    assert!(filter.contains("cherry").unwrap());

    // With 3 items in a filter sized for 1000, a false positive here is
    // astronomically unlikely.
    assert!(!filter.contains("orange").unwrap());

    assert_eq!(filter.stats().element_count, 3);
}

#[test]
fn test_no_false_negatives() {
    let mut filter = BloomFilter::new(1000, 0.01).unwrap();

    for i in 0..1000u64 {
        filter.insert(&i).unwrap();
    }

    for i in 0..1000u64 {
        assert!(filter.contains(&i).unwrap(), "False negative for {}", i);
    }
}

#[test]
fn test_determinism_across_instances() {
    let build = || {
        let mut filter = BloomFilter::new(1000, 0.01).unwrap();
        for i in 0..500u64 {
            filter.insert(&format!("element_{i}")).unwrap();
        }
        filter
    };

    let a = build();
    let b = build();

    assert_eq!(a.stats(), b.stats());

    // Same answers for items never inserted, false positives included
    for i in 0..2000u64 {
        let probe = format!("absent_{i}");
        assert_eq!(
            a.contains(probe.as_str()).unwrap(),
            b.contains(probe.as_str()).unwrap()
        );
    }
}

#[test]
fn test_monotonic_saturation() {
    let mut filter = BloomFilter::new(1000, 0.01).unwrap();
    let mut previous = 0;

    for i in 0..500u64 {
        filter.insert(&i).unwrap();
        let current = filter.stats().bits_set;
        assert!(current >= previous);
        previous = current;
    }
}

#[test]
fn test_parameter_bounds() {
    let filter = BloomFilter::new(1000, 0.01).unwrap();
    assert!(filter.size() > 0);
    assert!(filter.hash_count() >= 1);

    assert!(matches!(
        BloomFilter::new(0, 0.01).unwrap_err(),
        FilterError::InvalidParameter { .. }
    ));
    assert!(matches!(
        BloomFilter::new(1000, 1.5).unwrap_err(),
        FilterError::InvalidParameter { .. }
    ));
}

#[test]
fn test_clear_resets_counters_but_not_capacity() {
    let mut filter = BloomFilter::new(1000, 0.01).unwrap();

    filter.insert("element1").unwrap();
    filter.insert("element2").unwrap();
    assert_eq!(filter.stats().element_count, 2);

    let size_before = filter.stats().size;
    let hashes_before = filter.stats().hash_count;

    filter.clear();

    let stats = filter.stats();
    assert_eq!(stats.element_count, 0);
    assert_eq!(stats.bits_set, 0);
    assert_eq!(stats.size, size_before);
    assert_eq!(stats.hash_count, hashes_before);
    assert!(!filter.contains("element1").unwrap());
}

#[test]
fn test_duplicate_inserts() {
    let mut filter = BloomFilter::new(100, 0.01).unwrap();

    filter.insert("duplicate").unwrap();
    filter.insert("duplicate").unwrap();
    filter.insert("duplicate").unwrap();

    assert!(filter.contains("duplicate").unwrap());

    // Every call counts; the filter does not track uniqueness
    assert_eq!(filter.stats().element_count, 3);
}

#[test]
fn test_mixed_item_types() {
    let mut filter = BloomFilter::new(100, 0.01).unwrap();

    filter.insert(&123u64).unwrap();
    filter.insert(&45.67f64).unwrap();
    filter.insert("string").unwrap();
    filter.insert(&true).unwrap();

    assert!(filter.contains(&123u64).unwrap());
    assert!(filter.contains(&45.67f64).unwrap());
    assert!(filter.contains("string").unwrap());
    assert!(filter.contains(&true).unwrap());
}

#[test]
fn test_nan_is_rejected_without_side_effects() {
    let mut filter = BloomFilter::new(100, 0.01).unwrap();
    filter.insert("kept").unwrap();
    let before = filter.stats();

    assert!(matches!(
        filter.insert(&f64::NAN).unwrap_err(),
        FilterError::NonHashableInput { .. }
    ));
    assert!(filter.contains(&f64::NAN).is_err());

    assert_eq!(filter.stats(), before);
}

#[test]
fn test_builder_defaults() {
    let filter = FilterBuilder::new().build().unwrap();
    assert_eq!(filter.expected_elements(), 1000);
    assert!((filter.target_fpr() - 0.01).abs() < f64::EPSILON);
}

#[test]
fn test_load_factor_at_design_capacity() {
    let mut filter = BloomFilter::new(1000, 0.01).unwrap();

    for i in 0..1000u64 {
        filter.insert(&format!("item_{i}")).unwrap();
    }

    // At design load the fill fraction approaches 1 - e^(-kn/m) ≈ 0.52
    let stats = filter.stats();
    assert!(
        stats.load_factor > 0.45 && stats.load_factor < 0.58,
        "unexpected load factor {}",
        stats.load_factor
    );
    assert!(stats.estimated_false_positive_rate > 0.001);
    assert!(stats.estimated_false_positive_rate < 0.05);
}

/// Empirical validation of the parameter derivation: insert n random
/// distinct items into an (n, p) filter, then probe 10n items guaranteed
/// absent and check the observed false positive fraction stays within a
/// small multiple of the target. Seeded RNG keeps the run reproducible.
#[test]
fn test_empirical_false_positive_rate() {
    const N: usize = 1000;
    const TARGET_FPR: f64 = 0.01;
    const PROBES: usize = 10 * N;

    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
    let mut filter = BloomFilter::new(N, TARGET_FPR).unwrap();

    let mut inserted = HashSet::new();
    while inserted.len() < N {
        let item: String = (&mut rng)
            .sample_iter(&Alphanumeric)
            .take(16)
            .map(char::from)
            .collect();
        inserted.insert(item);
    }
    for item in &inserted {
        filter.insert(item.as_str()).unwrap();
    }

    // Probe strings are longer than anything inserted, so none can be a
    // true member.
    let mut false_positives = 0usize;
    for _ in 0..PROBES {
        let probe: String = (&mut rng)
            .sample_iter(&Alphanumeric)
            .take(24)
            .map(char::from)
            .collect();
        if filter.contains(probe.as_str()).unwrap() {
            false_positives += 1;
        }
    }

    let observed = false_positives as f64 / PROBES as f64;
    assert!(
        observed <= 3.0 * TARGET_FPR,
        "observed false positive rate {} exceeds 3x the {} target",
        observed,
        TARGET_FPR
    );
}

proptest! {
    #[test]
    fn prop_inserted_items_are_always_found(
        items in proptest::collection::vec("[a-z0-9]{0,16}", 1..64)
    ) {
        let mut filter = BloomFilter::new(1000, 0.01).unwrap();

        for item in &items {
            filter.insert(item.as_str()).unwrap();
        }

        for item in &items {
            prop_assert!(filter.contains(item.as_str()).unwrap());
        }

        prop_assert_eq!(filter.stats().element_count, items.len() as u64);
    }

    #[test]
    fn prop_clear_always_empties(
        items in proptest::collection::vec("[a-z]{1,8}", 1..32)
    ) {
        let mut filter = BloomFilter::new(500, 0.01).unwrap();

        for item in &items {
            filter.insert(item.as_str()).unwrap();
        }
        filter.clear();

        let stats = filter.stats();
        prop_assert_eq!(stats.element_count, 0);
        prop_assert_eq!(stats.bits_set, 0);
        for item in &items {
            prop_assert!(!filter.contains(item.as_str()).unwrap());
        }
    }
}
