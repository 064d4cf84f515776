//! Postcondition checks for sorted sequences.
//!
//! ## Purpose
//!
//! This module provides read-only checks used to confirm that a sort
//! produced an ordered permutation of its input, and to predict how much
//! exchange work a sequence requires.
//!
//! ## Design notes
//!
//! * **Non-mutating**: Every function borrows its input immutably.
//! * **Generics**: All checks are generic over `PrimInt` types.
//!
//! ## Key concepts
//!
//! * **Order**: Every adjacent pair is non-decreasing.
//! * **Permutation**: Two sequences hold the same multiset of values.
//! * **Inversions**: Pairs `i < j` with `v[i] > v[j]`. One exchange removes
//!   exactly one inversion, so a completed bubble sort performs exactly
//!   `count_inversions(input)` swaps.
//!
//! ## Invariants
//!
//! * `count_inversions(v) == 0` if and only if `is_sorted(v)`.
//!
//! ## Non-goals
//!
//! * This module does not sort or repair its input.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::PrimInt;

// ============================================================================
// Order Checks
// ============================================================================

/// Check that every adjacent pair of `seq` is non-decreasing.
#[inline]
pub fn is_sorted<T: PrimInt>(seq: &[T]) -> bool {
    seq.windows(2).all(|w| w[0] <= w[1])
}

/// Check that `a` and `b` hold the same values with the same multiplicities.
///
/// Compares sorted copies of both inputs.
pub fn is_permutation_of<T: PrimInt>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut lhs: Vec<T> = a.to_vec();
    let mut rhs: Vec<T> = b.to_vec();
    lhs.sort_unstable();
    rhs.sort_unstable();

    lhs == rhs
}

// ============================================================================
// Work Estimates
// ============================================================================

/// Count the pairs `i < j` with `seq[i] > seq[j]`.
///
/// Runs in O(n^2) time without allocating.
pub fn count_inversions<T: PrimInt>(seq: &[T]) -> usize {
    let mut inversions = 0;

    for (i, &a) in seq.iter().enumerate() {
        inversions += seq[i + 1..].iter().filter(|&&b| a > b).count();
    }

    inversions
}
