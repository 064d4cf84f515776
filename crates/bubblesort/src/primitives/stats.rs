//! Work counters for exchange passes.
//!
//! A single pass over the sequence reports how many adjacent pairs it
//! compared and how many of those it exchanged. The engine folds these into
//! the totals of a [`SortReport`](crate::engine::output::SortReport).

use core::ops::AddAssign;

/// Comparisons and exchanges performed by one or more passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassStats {
    /// Adjacent pairs compared.
    pub comparisons: usize,

    /// Adjacent pairs exchanged.
    pub swaps: usize,
}

impl PassStats {
    /// A pass that exchanged nothing leaves the scanned range sorted.
    #[inline]
    pub fn is_quiescent(&self) -> bool {
        self.swaps == 0
    }
}

impl AddAssign for PassStats {
    fn add_assign(&mut self, rhs: Self) {
        self.comparisons += rhs.comparisons;
        self.swaps += rhs.swaps;
    }
}
