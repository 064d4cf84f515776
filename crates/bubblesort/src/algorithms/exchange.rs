//! Adjacent-exchange passes and pass scheduling.
//!
//! ## Purpose
//!
//! This module implements the exchange pass at the heart of bubble sort and
//! the termination policies that decide how many passes are run.
//!
//! ## Design notes
//!
//! * **In-place**: Passes only swap elements inside the borrowed slice.
//! * **Generics**: Works over any `PrimInt` element type.
//! * **Accounting**: Every pass reports its comparisons and exchanges.
//!
//! ## Key concepts
//!
//! ### Exchange pass
//! A pass walks the adjacent pairs `(i, i + 1)` for `i < bound` and swaps
//! each pair with `v[i] > v[i + 1]`. After pass `k` the largest `k + 1`
//! values occupy their final positions at the tail.
//!
//! ### Termination
//! * **FixedPasses**: `n` passes over all `n - 1` pairs, regardless of progress.
//! * **EarlyExit**: the scanned range shrinks by one after every pass and the
//!   schedule stops after the first pass that performs no exchange.
//!
//! ## Invariants
//!
//! * Every swap removes exactly one inversion.
//! * Both policies yield the same final ordering.
//!
//! ## Non-goals
//!
//! * This module does not validate its input or emit diagnostics.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::stats::PassStats;

// ============================================================================
// Termination Policy
// ============================================================================

/// Policy deciding how many exchange passes are run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Termination {
    /// Run `n` full passes over every adjacent pair.
    ///
    /// Performs exactly `n * (n - 1)` comparisons.
    FixedPasses,

    /// Shrink the scanned range after each pass and stop once a pass makes
    /// no exchange.
    ///
    /// Performs `n - 1` comparisons on already-sorted input.
    #[default]
    EarlyExit,
}

impl Termination {
    /// Upper bound on the number of passes for a sequence of length `n`.
    #[inline]
    pub fn max_passes(&self, n: usize) -> usize {
        if n < 2 {
            return 0;
        }
        match self {
            Self::FixedPasses => n,
            Self::EarlyExit => n - 1,
        }
    }

    /// Number of adjacent pairs scanned by pass `pass` over `n` elements.
    #[inline]
    pub fn pass_bound(&self, n: usize, pass: usize) -> usize {
        let pairs = n.saturating_sub(1);
        match self {
            Self::FixedPasses => pairs,
            Self::EarlyExit => pairs.saturating_sub(pass),
        }
    }

    /// Whether the schedule may stop after a pass with these counters.
    #[inline]
    pub fn should_stop(&self, stats: &PassStats) -> bool {
        matches!(self, Self::EarlyExit) && stats.is_quiescent()
    }
}

// ============================================================================
// Exchange Pass
// ============================================================================

/// Run one exchange pass over the first `bound` adjacent pairs of `seq`.
///
/// `bound` is clamped to `seq.len() - 1`.
#[inline]
pub fn exchange_pass<T: PrimInt>(seq: &mut [T], bound: usize) -> PassStats {
    let bound = bound.min(seq.len().saturating_sub(1));
    let mut stats = PassStats::default();

    for i in 0..bound {
        stats.comparisons += 1;
        if seq[i] > seq[i + 1] {
            seq.swap(i, i + 1);
            stats.swaps += 1;
        }
    }

    stats
}

/// Sort `seq` ascending under `termination`, calling `on_pass` after every pass.
///
/// Returns the accumulated counters and the number of passes run.
pub fn exchange_sort<T, F>(
    seq: &mut [T],
    termination: Termination,
    mut on_pass: F,
) -> (PassStats, usize)
where
    T: PrimInt,
    F: FnMut(usize, &PassStats),
{
    let n = seq.len();
    let mut total = PassStats::default();
    let mut passes = 0;

    for pass in 0..termination.max_passes(n) {
        let stats = exchange_pass(seq, termination.pass_bound(n, pass));
        total += stats;
        passes += 1;
        on_pass(pass, &stats);

        if termination.should_stop(&stats) {
            break;
        }
    }

    (total, passes)
}
