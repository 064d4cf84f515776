//! Output types for sorting operations.
//!
//! ## Purpose
//!
//! This module defines the `SortReport` struct, which records the work a
//! single sort performed. The sorted values themselves live in the caller's
//! slice.
//!
//! ## Design notes
//!
//! * **Lightweight**: The report is `Copy` and holds no reference to the input.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `passes <= termination.max_passes(len)`.
//! * `swaps <= comparisons`.
//! * `terminated_early` implies `termination == EarlyExit`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::algorithms::exchange::Termination;

// ============================================================================
// Report Structure
// ============================================================================

/// Work performed by one completed sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortReport {
    /// Number of elements in the sorted sequence.
    pub len: usize,

    /// Exchange passes performed.
    pub passes: usize,

    /// Adjacent pairs compared across all passes.
    pub comparisons: usize,

    /// Adjacent pairs exchanged across all passes.
    pub swaps: usize,

    /// Whether the schedule stopped before its pass limit.
    pub terminated_early: bool,

    /// Pass policy the sort ran under.
    pub termination: Termination,

    /// Result of the postcondition check, when verification was requested.
    pub verified: Option<bool>,
}

impl SortReport {
    /// Report for a sequence that needed no passes.
    pub(crate) fn trivial(len: usize, termination: Termination) -> Self {
        Self {
            len,
            passes: 0,
            comparisons: 0,
            swaps: 0,
            terminated_early: false,
            termination,
            verified: None,
        }
    }

    /// Check if any element changed position.
    pub fn is_modified(&self) -> bool {
        self.swaps > 0
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Elements:    {}", self.len)?;
        writeln!(f, "  Termination: {:?}", self.termination)?;
        writeln!(f, "  Passes:      {}", self.passes)?;
        writeln!(f, "  Comparisons: {}", self.comparisons)?;
        writeln!(f, "  Swaps:       {}", self.swaps)?;

        if self.terminated_early {
            writeln!(f, "  Early exit:  Applied")?;
        }

        if let Some(ok) = self.verified {
            writeln!(f, "  Verified:    {}", if ok { "Sorted" } else { "FAILED" })?;
        }

        Ok(())
    }
}
