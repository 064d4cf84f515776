//! Layer 3: Evaluation
//!
//! # Purpose
//!
//! This layer checks sort results without mutating them:
//! - Ordering and permutation postconditions
//! - Inversion counts predicting exchange work
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Evaluation ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Postcondition checks and work estimates.
pub mod diagnostics;
