//! Trait seams between the engine and its consumers.

use crate::invariants::Invariants;
use crate::models::DensityResult;

/// A density engine: five invariants in, full structured result out.
///
/// Implementations must be pure — no I/O, no shared mutable state, identical
/// inputs producing bit-identical results.
pub trait IDensityEngine {
    fn calculate(&self, params: &Invariants) -> DensityResult;
}
