use conduit_core::Invariants;

/// Entropy penalty: `1 − √H`.
///
/// Range: 0.0 – 1.0.
/// The square root (rather than a linear term) differentiates moderate from
/// high entropy more sharply. Fixed design constant of the formula, not
/// tunable.
pub fn calculate(params: &Invariants) -> f64 {
    1.0 - params.entropy.sqrt()
}
