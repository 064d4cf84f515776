//! # bubblesort — In-place exchange sorting for integer sequences
//!
//! Sorts a caller-owned slice of primitive integers ascending, in place,
//! using adjacent comparison exchanges, and reports the work it performed.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! let mut values = [5, 3, 8, 4, 2];
//!
//! let report = bubblesort::sort(&mut values);
//!
//! assert_eq!(values, [2, 3, 4, 5, 8]);
//! assert_eq!(report.swaps, 7);
//! ```
//!
//! ### Configured Sorter
//!
//! ```rust
//! use bubblesort::prelude::*;
//!
//! let sorter = BubbleSort::new()
//!     .termination(FixedPasses) // Always run n full passes
//!     .verify(true)             // Re-check ordering afterwards
//!     .build()?;
//!
//! let mut values = vec![-3, 0, -3, 2];
//! let report = sorter.sort(&mut values);
//!
//! assert_eq!(values, vec![-3, -3, 0, 2]);
//! assert_eq!(report.passes, 4);
//! assert_eq!(report.verified, Some(true));
//!
//! println!("{}", report);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Elements:    4
//!   Termination: FixedPasses
//!   Passes:      4
//!   Comparisons: 12
//!   Swaps:       1
//!   Verified:    Sorted
//! ```
//!
//! ### Result and Error Handling
//!
//! An absent sequence is an explicit error rather than a panic. The checked
//! entry points take `Option<&mut [T]>` and return
//! `Result<SortReport, SortError>`; nothing is mutated on failure.
//!
//! ```rust
//! use bubblesort::prelude::*;
//!
//! let missing: Option<&mut [i32]> = None;
//! match bubblesort::try_sort(missing) {
//!     Ok(_) => unreachable!(),
//!     Err(e) => assert!(matches!(e, SortError::InvalidArgument(_))),
//! }
//! ```
//!
//! ## Pass Policies
//!
//! * **EarlyExit** (default): pass `k` scans the first `n - 1 - k` pairs and
//!   the sort stops after the first pass with no exchange.
//! * **FixedPasses**: `n` passes over all `n - 1` pairs.
//!
//! Both policies produce the same ordering; only the amount of work differs.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! ```toml
//! [dependencies]
//! bubblesort = { version = "0.1", default-features = false }
//! ```
//!
//! ## Logging
//!
//! Progress is reported through the [`log`] facade: one `trace` record per
//! pass and one `debug` record per sort. No logger is installed by this crate.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - error type and work counters.
mod primitives;

// Layer 2: Algorithms - exchange passes and scheduling.
mod algorithms;

// Layer 3: Evaluation - postcondition checks.
mod evaluation;

// Layer 4: Engine - validation and execution.
mod engine;

// Layer 5: High-level fluent API.
mod api;

pub use crate::api::{sort, try_sort};
pub use crate::evaluation::diagnostics::{count_inversions, is_permutation_of, is_sorted};

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        SortBuilder as BubbleSort, SortError, SortReport, Sorter, Termination,
        Termination::EarlyExit, Termination::FixedPasses,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
