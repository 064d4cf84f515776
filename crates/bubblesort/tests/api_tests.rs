#![cfg(feature = "dev")]
//! Tests for the public sorting API.
//!
//! These tests verify:
//! - Builder defaults and duplicate parameter detection
//! - The documented sorting scenarios
//! - Rejection of an absent sequence without side effects
//! - Ordering, permutation, idempotence and swap accounting on seeded random input
//!
//! ## Test Organization
//!
//! 1. **Builder** - Defaults, configuration, duplicates
//! 2. **Scenarios** - Concrete inputs and outputs
//! 3. **Checked Entry Points** - try_sort
//! 4. **Properties** - Randomised invariants across element types

use bubblesort::internals::api::{SortBuilder, SortError, Sorter, Termination};
use bubblesort::{count_inversions, is_permutation_of, is_sorted, sort, try_sort};

// ============================================================================
// Helper Functions
// ============================================================================

/// Minimal seeded PRNG for reproducible inputs.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }

    /// Value in `[-span, span]`.
    fn next_i32(&mut self, span: u32) -> i32 {
        (self.next_u32() % (2 * span + 1)) as i32 - span as i32
    }
}

/// Random sequences of length 0..=max_len with many duplicate values.
fn random_sequences(seed: u64, count: usize, max_len: usize) -> Vec<Vec<i32>> {
    let mut rng = SimpleRng::new(seed);
    (0..count)
        .map(|_| {
            let len = rng.next_u32() as usize % (max_len + 1);
            (0..len).map(|_| rng.next_i32(20)).collect()
        })
        .collect()
}

// ============================================================================
// Builder Tests
// ============================================================================

/// Test builder defaults.
#[test]
fn test_builder_defaults() {
    let sorter = SortBuilder::new().build().unwrap();

    assert_eq!(sorter.termination(), Termination::EarlyExit);
    assert_eq!(sorter, Sorter::default());
}

/// Test that configured values reach the sorter.
#[test]
fn test_builder_configuration() {
    let sorter = SortBuilder::new()
        .termination(Termination::FixedPasses)
        .verify(true)
        .build()
        .unwrap();

    let mut seq = [2, 1];
    let report = sorter.sort(&mut seq);

    assert_eq!(sorter.termination(), Termination::FixedPasses);
    assert_eq!(report.verified, Some(true));
    assert_eq!(report.passes, 2);
}

/// Test that setting the pass policy twice fails at build time.
#[test]
fn test_builder_duplicate_termination() {
    let res = SortBuilder::new()
        .termination(Termination::FixedPasses)
        .termination(Termination::EarlyExit)
        .build();

    assert_eq!(
        res,
        Err(SortError::DuplicateParameter {
            parameter: "termination"
        })
    );
}

/// Test that setting verification twice fails at build time.
#[test]
fn test_builder_duplicate_verify() {
    let res = SortBuilder::new().verify(true).verify(false).build();

    assert!(matches!(
        res,
        Err(SortError::DuplicateParameter { parameter: "verify" })
    ));
}

// ============================================================================
// Scenario Tests
// ============================================================================

/// Test the canonical five-element example.
#[test]
fn test_scenario_mixed() {
    let mut seq = [5, 3, 8, 4, 2];
    sort(&mut seq);
    assert_eq!(seq, [2, 3, 4, 5, 8]);
}

/// Test all-equal input.
#[test]
fn test_scenario_all_equal() {
    let mut seq = [1, 1, 1];
    sort(&mut seq);
    assert_eq!(seq, [1, 1, 1]);
}

/// Test negative values and duplicates.
#[test]
fn test_scenario_negative_duplicates() {
    let mut seq = [-3, 0, -3, 2];
    sort(&mut seq);
    assert_eq!(seq, [-3, -3, 0, 2]);
}

/// Test empty and singleton input.
#[test]
fn test_scenario_empty_and_singleton() {
    let mut empty: Vec<i32> = vec![];
    sort(&mut empty);
    assert!(empty.is_empty());

    let mut single = [17];
    sort(&mut single);
    assert_eq!(single, [17]);
}

/// Test sorting a sub-slice leaves the rest untouched.
#[test]
fn test_scenario_sub_slice() {
    let mut seq = [9, 4, 3, 2, 0];
    sort(&mut seq[1..4]);
    assert_eq!(seq, [9, 2, 3, 4, 0]);
}

// ============================================================================
// Checked Entry Point Tests
// ============================================================================

/// Test that an absent sequence fails with InvalidArgument.
#[test]
fn test_try_sort_absent() {
    let res = try_sort::<i32>(None);

    assert!(matches!(res, Err(SortError::InvalidArgument(_))));
}

/// Test that a failed call leaves unrelated data untouched.
#[test]
fn test_try_sort_absent_no_mutation() {
    let data = vec![3, 1, 2];
    let sorter = SortBuilder::new().verify(true).build().unwrap();

    let res = sorter.try_sort::<i32>(None);

    assert!(res.is_err());
    assert_eq!(data, vec![3, 1, 2]);
}

/// Test that a present sequence is sorted by the checked entry point.
#[test]
fn test_try_sort_present() {
    let mut seq = vec![5, 3, 8, 4, 2];

    let report = try_sort(Some(seq.as_mut_slice())).unwrap();

    assert_eq!(seq, vec![2, 3, 4, 5, 8]);
    assert_eq!(report.swaps, 7);
}

/// Test the checked entry point on an empty sequence.
#[test]
fn test_try_sort_empty() {
    let mut seq: [i64; 0] = [];

    let report = try_sort(Some(&mut seq[..])).unwrap();

    assert_eq!(report.len, 0);
    assert_eq!(report.passes, 0);
}

// ============================================================================
// Property Tests
// ============================================================================

/// Test ordering and permutation invariants on random input.
#[test]
fn test_property_sorted_permutation() {
    for original in random_sequences(42, 200, 40) {
        let mut seq = original.clone();
        sort(&mut seq);

        assert!(is_sorted(&seq), "Not sorted: {:?} -> {:?}", original, seq);
        assert!(
            is_permutation_of(&seq, &original),
            "Multiset changed: {:?} -> {:?}",
            original,
            seq
        );
    }
}

/// Test agreement with the standard library sort.
#[test]
fn test_property_matches_std() {
    for original in random_sequences(7, 200, 40) {
        let mut seq = original.clone();
        let mut expected = original.clone();

        sort(&mut seq);
        expected.sort_unstable();

        assert_eq!(seq, expected);
    }
}

/// Test that both pass policies produce identical output.
#[test]
fn test_property_policy_equivalence() {
    let early = SortBuilder::new().build().unwrap();
    let fixed = SortBuilder::new()
        .termination(Termination::FixedPasses)
        .build()
        .unwrap();

    for original in random_sequences(123, 200, 30) {
        let mut a = original.clone();
        let mut b = original.clone();

        let ra = early.sort(&mut a);
        let rb = fixed.sort(&mut b);

        assert_eq!(a, b);
        assert_eq!(ra.swaps, rb.swaps);
        assert!(ra.comparisons <= rb.comparisons);

        let n = original.len();
        if n >= 2 {
            assert_eq!(rb.comparisons, n * (n - 1));
        }
    }
}

/// Test that every exchange removes exactly one inversion.
#[test]
fn test_property_swaps_equal_inversions() {
    for original in random_sequences(2024, 200, 40) {
        let mut seq = original.clone();
        let report = sort(&mut seq);

        assert_eq!(report.swaps, count_inversions(&original));
    }
}

/// Test idempotence on random input.
///
/// A second sort performs one quiescent pass and changes nothing.
#[test]
fn test_property_idempotent() {
    for original in random_sequences(99, 100, 40) {
        let mut seq = original.clone();
        sort(&mut seq);
        let once = seq.clone();

        let report = sort(&mut seq);

        assert_eq!(seq, once);
        assert_eq!(report.swaps, 0);
        assert!(report.passes <= 1);
    }
}

/// Test a range of primitive integer widths.
#[test]
fn test_property_integer_types() {
    let mut bytes: [u8; 5] = [200, 50, 100, 150, 25];
    sort(&mut bytes);
    assert_eq!(bytes, [25, 50, 100, 150, 200]);

    let mut wide: [i64; 4] = [i64::MAX, -1_000_000_000, i64::MIN, 0];
    sort(&mut wide);
    assert_eq!(wide, [i64::MIN, -1_000_000_000, 0, i64::MAX]);

    let mut sizes: Vec<usize> = vec![3, usize::MAX, 0, 3];
    sort(&mut sizes);
    assert_eq!(sizes, vec![0, 3, 3, usize::MAX]);

    let mut big: [i128; 3] = [1, -1, 0];
    sort(&mut big);
    assert_eq!(big, [-1, 0, 1]);
}
