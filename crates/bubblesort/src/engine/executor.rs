//! Execution engine for exchange sorting.
//!
//! ## Purpose
//!
//! This module drives the exchange passes over a validated sequence,
//! accumulates their counters into a [`SortReport`], and optionally checks
//! the sorted postcondition afterwards.
//!
//! ## Design notes
//!
//! * Separates scheduling (`Termination`) from the pass itself.
//! * Emits one `trace` record per pass and one `debug` record per sort.
//! * Generic over `PrimInt` element types.
//!
//! ## Invariants
//!
//! * Sequences of length 0 or 1 are returned untouched with zero passes.
//! * `report.swaps` equals the inversion count of the input.
//!
//! ## Non-goals
//!
//! * This module does not validate arguments (handled by `validator`).
//! * This module does not format results for display.

// External dependencies
use log::{debug, trace};
use num_traits::PrimInt;

// Internal dependencies
use crate::algorithms::exchange::{Termination, exchange_sort};
use crate::engine::output::SortReport;
use crate::evaluation::diagnostics::is_sorted;

// ============================================================================
// Executor
// ============================================================================

/// Unified execution engine for exchange sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortExecutor {
    /// Pass policy.
    pub termination: Termination,

    /// Re-check ordering after the final pass.
    pub verify: bool,
}

impl SortExecutor {
    /// Create a new executor with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pass policy.
    pub fn termination(mut self, termination: Termination) -> Self {
        self.termination = termination;
        self
    }

    /// Enable or disable the postcondition check.
    pub fn verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Sort `seq` ascending in place and report the work performed.
    pub fn run<T: PrimInt>(&self, seq: &mut [T]) -> SortReport {
        let n = seq.len();
        if n < 2 {
            let mut report = SortReport::trivial(n, self.termination);
            if self.verify {
                report.verified = Some(true);
            }
            return report;
        }

        let (total, passes) = exchange_sort(seq, self.termination, |pass, stats| {
            trace!(
                "pass {}: {} comparisons, {} swaps",
                pass,
                stats.comparisons,
                stats.swaps
            );
        });

        let report = SortReport {
            len: n,
            passes,
            comparisons: total.comparisons,
            swaps: total.swaps,
            terminated_early: passes < self.termination.max_passes(n),
            termination: self.termination,
            verified: self.verify.then(|| is_sorted(seq)),
        };

        debug!(
            "sorted {} elements in {} passes ({} comparisons, {} swaps, {:?})",
            report.len, report.passes, report.comparisons, report.swaps, report.termination
        );

        report
    }
}
