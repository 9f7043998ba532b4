use conduit_core::Invariants;

/// Coherence recovery: `H × κ`.
///
/// Range: 0.0 – 1.0. Purely additive: structured entropy (high κ) partially
/// offsets the entropy penalty, with no damping of its own.
pub fn calculate(params: &Invariants) -> f64 {
    params.entropy * params.kappa
}
