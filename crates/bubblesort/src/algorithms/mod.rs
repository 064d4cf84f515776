//! Layer 2: Algorithms
//!
//! This layer implements the exchange passes and the pass schedule. It holds
//! the sorting logic itself but is orchestrated by the engine layer.

// Adjacent-exchange passes and termination policies.
pub mod exchange;
