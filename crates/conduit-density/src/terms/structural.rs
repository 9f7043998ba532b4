use conduit_core::Invariants;

/// Structural base: `φ × τ × ρ`.
///
/// Range: 0.0 – 1.0 for in-domain input.
/// Multiplicative gate: any structural dimension at exactly zero collapses
/// the base (and therefore D) to exactly zero, regardless of H and κ.
pub fn calculate(params: &Invariants) -> f64 {
    params.phi * params.tau * params.rho
}
