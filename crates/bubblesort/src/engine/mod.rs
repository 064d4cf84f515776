//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a sort by coordinating argument validation, the
//! exchange passes, and the optional postcondition check.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Execution engine for exchange sorting.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for sorting operations.
pub mod output;
