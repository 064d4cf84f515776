//! High-level API for exchange sorting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for choosing the pass policy and verification, ending in a
//! reusable [`Sorter`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Builder misuse is reported when `.build()` is called.
//! * **Type-Safe**: Generic over `PrimInt` element types at the call site.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SortBuilder`] via `BubbleSort::new()`.
//! 2. Chain configuration methods (`.termination()`, `.verify()`).
//! 3. Call `.build()` to obtain a [`Sorter`].
//! 4. Call `.sort()` or `.try_sort()` on as many sequences as needed.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::engine::executor::SortExecutor;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::exchange::Termination;
pub use crate::engine::output::SortReport;
pub use crate::primitives::errors::SortError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a [`Sorter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SortBuilder {
    /// Pass policy (default: EarlyExit).
    pub termination: Option<Termination>,

    /// Check the sorted postcondition after each sort (default: false).
    pub verify: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl SortBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pass policy.
    pub fn termination(mut self, termination: Termination) -> Self {
        if self.termination.is_some() {
            self.duplicate_param = Some("termination");
        }
        self.termination = Some(termination);
        self
    }

    /// Re-check ordering after each sort and record the outcome in the report.
    pub fn verify(mut self, verify: bool) -> Self {
        if self.verify.is_some() {
            self.duplicate_param = Some("verify");
        }
        self.verify = Some(verify);
        self
    }

    /// Validate the configuration and build the sorter.
    pub fn build(self) -> Result<Sorter, SortError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(Sorter {
            executor: SortExecutor::new()
                .termination(self.termination.unwrap_or_default())
                .verify(self.verify.unwrap_or(false)),
        })
    }
}

// ============================================================================
// Sorter
// ============================================================================

/// Configured in-place exchange sorter.
///
/// Holds no per-call state and can be reused for any number of sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sorter {
    executor: SortExecutor,
}

impl Sorter {
    /// Pass policy this sorter runs under.
    pub fn termination(&self) -> Termination {
        self.executor.termination
    }

    /// Sort `seq` ascending in place.
    pub fn sort<T: PrimInt>(&self, seq: &mut [T]) -> SortReport {
        self.executor.run(seq)
    }

    /// Sort `seq` ascending in place, rejecting an absent sequence.
    ///
    /// Returns [`SortError::InvalidArgument`] for `None` without side effects.
    pub fn try_sort<T: PrimInt>(&self, seq: Option<&mut [T]>) -> Result<SortReport, SortError> {
        let seq = Validator::validate_sequence(seq)?;
        Ok(self.executor.run(seq))
    }
}

// ============================================================================
// Shortcuts
// ============================================================================

/// Sort `seq` ascending in place with the default configuration.
pub fn sort<T: PrimInt>(seq: &mut [T]) -> SortReport {
    SortExecutor::new().run(seq)
}

/// Sort `seq` ascending in place with the default configuration, rejecting
/// an absent sequence.
pub fn try_sort<T: PrimInt>(seq: Option<&mut [T]>) -> Result<SortReport, SortError> {
    Sorter::default().try_sort(seq)
}
