//! The three sub-terms of the density formula.
//!
//! Each is a small pure function over already-clamped invariants.

pub mod coherence;
pub mod entropy;
pub mod structural;
