use conduit_core::config::WarningThresholds;
use conduit_core::Invariants;

/// Derive advisory warnings from a clamped parameter set.
///
/// Rules are independent predicates evaluated over the same clamped values
/// the formula sees, so a warning can never disagree with the computed
/// score. Multiple rules may fire; output order is the fixed declaration
/// order below. Warnings never mutate D.
pub fn derive(params: &Invariants, thresholds: &WarningThresholds) -> Vec<String> {
    let mut warnings = Vec::new();

    if params.has_structural_zero() {
        warnings.push(
            "Perspective collapsed: a structural invariant (φ, τ, or ρ) is exactly zero."
                .to_string(),
        );
    }

    if params.entropy > thresholds.high_entropy && params.kappa < thresholds.low_coherence {
        warnings.push(format!(
            "Dissolution-like state: high entropy (H={:.2}) with low coherence (κ={:.2}) \
             is unstructured chaos.",
            params.entropy, params.kappa
        ));
    }

    if params.rho < thresholds.low_binding {
        warnings.push(format!(
            "Near-zero binding (ρ={:.2}): minimal self-reference.",
            params.rho
        ));
    }

    if params.kappa > thresholds.high_coherence {
        warnings.push(format!(
            "Coherence κ={:.2} is outside the well-estimated range; values this high are \
             poorly constrained.",
            params.kappa
        ));
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(phi: f64, tau: f64, rho: f64, entropy: f64, kappa: f64) -> Invariants {
        Invariants::new(phi, tau, rho, entropy, kappa).unwrap()
    }

    #[test]
    fn quiet_baseline_produces_no_warnings() {
        let warnings = derive(&Invariants::default(), &WarningThresholds::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn multiple_rules_fire_in_declaration_order() {
        // ρ = 0 trips both the collapse rule and the low-binding rule;
        // H/κ trip the dissolution rule in between.
        let p = params(0.8, 0.8, 0.0, 0.9, 0.1);
        let warnings = derive(&p, &WarningThresholds::default());
        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].contains("collapsed"));
        assert!(warnings[1].contains("Dissolution"));
        assert!(warnings[2].contains("binding"));
    }

    #[test]
    fn high_coherence_caveat_fires_above_threshold_only() {
        let thresholds = WarningThresholds::default();
        assert!(derive(&params(0.8, 0.8, 0.8, 0.3, 0.9), &thresholds).is_empty());
        let warnings = derive(&params(0.8, 0.8, 0.8, 0.3, 0.95), &thresholds);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("well-estimated range"));
    }
}
