//! Error types for sorting operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions surfaced by the checked sorting
//! entry points and by builder configuration.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the name of the offending argument or parameter.
//! * **Deferred**: Builder misuse is recorded during configuration and reported by `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Argument validation**: The sequence to sort must be present.
//! 2. **Builder validation**: Each parameter may be configured once.
//!
//! ## Invariants
//!
//! * An error is always returned before the sequence is mutated.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sorting operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// A required argument was absent or unusable.
    InvalidArgument(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SortError {}
