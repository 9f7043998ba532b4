use conduit_core::Invariants;

use crate::terms;

/// The numeric part of a density calculation: the four sub-terms and the
/// final score.
///
/// ```text
/// D = structuralBase × entropyModulator
///   = (φ × τ × ρ) × [(1 − √H) + (H × κ)]
/// ```
///
/// No output clamp is applied: for in-domain input the formula structure
/// keeps D in [0.0, 1.0] on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Terms {
    pub structural_base: f64,
    pub entropy_penalty: f64,
    pub coherence_recovery: f64,
    pub entropy_modulator: f64,
    pub density: f64,
}

/// Compute all terms for an already-clamped parameter set.
pub fn compute(params: &Invariants) -> Terms {
    let structural_base = terms::structural::calculate(params);
    let entropy_penalty = terms::entropy::calculate(params);
    let coherence_recovery = terms::coherence::calculate(params);
    let entropy_modulator = entropy_penalty + coherence_recovery;
    let density = structural_base * entropy_modulator;

    Terms {
        structural_base,
        entropy_penalty,
        coherence_recovery,
        entropy_modulator,
        density,
    }
}
