//! Input validation for sort arguments and builder configuration.
//!
//! ## Purpose
//!
//! This module checks the arguments of the checked entry points and the
//! state of the builder before any sequence is touched.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Atomic**: Nothing is mutated when validation fails.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort or inspect sequence contents.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;

// Internal dependencies
use crate::primitives::errors::SortError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sort arguments and builder configuration.
pub struct Validator;

impl Validator {
    /// Validate that a sequence was supplied and hand back the borrow.
    ///
    /// Any finite sequence is accepted, including the empty one.
    pub fn validate_sequence<T>(seq: Option<&mut [T]>) -> Result<&mut [T], SortError> {
        seq.ok_or_else(|| SortError::InvalidArgument("sequence is absent".to_string()))
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SortError> {
        if let Some(param) = duplicate_param {
            return Err(SortError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
