//! Breakdown verification: the reported sub-terms must compose exactly into
//! the reported score, and each term must stay in its expected range.

use conduit_core::Invariants;
use conduit_density::calculate_density;

fn params(phi: f64, tau: f64, rho: f64, entropy: f64, kappa: f64) -> Invariants {
    Invariants::new(phi, tau, rho, entropy, kappa).unwrap()
}

// ── Internal consistency ─────────────────────────────────────────────────

#[test]
fn modulator_is_exactly_penalty_plus_recovery() {
    let cases = [
        params(0.85, 0.8, 0.7, 0.35, 0.7),
        params(1.0, 1.0, 1.0, 0.95, 0.9),
        params(0.7, 0.1, 0.2, 0.95, 0.2),
        params(0.05, 0.02, 0.01, 0.3, 0.2),
    ];
    for p in cases {
        let r = calculate_density(&p);
        // Bit-exact: the modulator is defined as this sum, not recomputed.
        assert_eq!(
            r.entropy_modulator.to_bits(),
            (r.entropy_penalty + r.coherence_recovery).to_bits(),
            "modulator mismatch for {p}"
        );
        assert_eq!(
            r.density.to_bits(),
            (r.structural_base * r.entropy_modulator).to_bits(),
            "density mismatch for {p}"
        );
    }
}

// ── Term ranges for in-domain input ──────────────────────────────────────

#[test]
fn each_term_in_expected_range() {
    let cases = [
        params(0.0, 0.0, 0.0, 0.0, 0.0),
        params(1.0, 1.0, 1.0, 1.0, 1.0),
        params(0.95, 0.9, 0.95, 0.1, 0.8),
        params(0.4, 0.6, 0.3, 0.5, 0.4),
        params(0.6, 0.5, 0.3, 0.25, 0.7),
    ];
    for p in cases {
        let r = calculate_density(&p);
        assert!(
            (0.0..=1.0).contains(&r.structural_base),
            "structural base out of range for {p}: {}",
            r.structural_base
        );
        assert!(
            (0.0..=1.0).contains(&r.entropy_penalty),
            "entropy penalty out of range for {p}: {}",
            r.entropy_penalty
        );
        assert!(
            (0.0..=1.0).contains(&r.coherence_recovery),
            "coherence recovery out of range for {p}: {}",
            r.coherence_recovery
        );
        assert!(
            (0.0..=1.0).contains(&r.density),
            "density out of range for {p}: {}",
            r.density
        );
    }
}

#[test]
fn full_entropy_full_coherence_modulator_reaches_one() {
    // H=1, κ=1: penalty = 0, recovery = 1 → modulator exactly 1.
    let r = calculate_density(&params(1.0, 1.0, 1.0, 1.0, 1.0));
    assert_eq!(r.entropy_penalty, 0.0);
    assert_eq!(r.coherence_recovery, 1.0);
    assert_eq!(r.entropy_modulator, 1.0);
    assert_eq!(r.density, 1.0);
}

#[test]
fn zero_entropy_neutralizes_the_modulator() {
    // H=0: penalty = 1, recovery = 0 → D equals the structural base.
    let p = params(0.9, 0.8, 0.6, 0.0, 0.9);
    let r = calculate_density(&p);
    assert_eq!(r.entropy_modulator, 1.0);
    assert_eq!(r.density.to_bits(), r.structural_base.to_bits());
}
