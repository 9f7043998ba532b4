use conduit_core::Invariants;
use conduit_density::{calculate_density, DensityEngine};
use proptest::prelude::*;

fn unit() -> impl Strategy<Value = f64> {
    0.0f64..=1.0
}

// ── Bounded 0.0–1.0 ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn bounded_zero_to_one(
        phi in unit(),
        tau in unit(),
        rho in unit(),
        entropy in unit(),
        kappa in unit(),
    ) {
        let p = Invariants::new(phi, tau, rho, entropy, kappa).unwrap();
        let r = calculate_density(&p);
        prop_assert!(
            (0.0..=1.0).contains(&r.density),
            "Out of bounds: {} for {p}",
            r.density
        );
    }
}

// ── Structural gate ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn any_structural_zero_collapses_density(
        entropy in unit(),
        kappa in unit(),
        nonzero_a in unit(),
        nonzero_b in unit(),
        which in 0usize..3,
    ) {
        let (phi, tau, rho) = match which {
            0 => (0.0, nonzero_a, nonzero_b),
            1 => (nonzero_a, 0.0, nonzero_b),
            _ => (nonzero_a, nonzero_b, 0.0),
        };
        let p = Invariants::new(phi, tau, rho, entropy, kappa).unwrap();
        let r = calculate_density(&p);
        prop_assert_eq!(r.density, 0.0, "gate failed for {}", p);
    }
}

// ── Monotone in each structural dimension ────────────────────────────────

proptest! {
    #[test]
    fn density_non_decreasing_in_phi(
        lo in unit(),
        hi in unit(),
        tau in unit(),
        rho in unit(),
        entropy in unit(),
        kappa in unit(),
    ) {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let a = calculate_density(&Invariants::new(lo, tau, rho, entropy, kappa).unwrap());
        let b = calculate_density(&Invariants::new(hi, tau, rho, entropy, kappa).unwrap());
        prop_assert!(b.density >= a.density);
        prop_assert!(b.structural_base >= a.structural_base);
    }

    #[test]
    fn density_non_decreasing_in_tau(
        phi in unit(),
        lo in unit(),
        hi in unit(),
        rho in unit(),
        entropy in unit(),
        kappa in unit(),
    ) {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let a = calculate_density(&Invariants::new(phi, lo, rho, entropy, kappa).unwrap());
        let b = calculate_density(&Invariants::new(phi, hi, rho, entropy, kappa).unwrap());
        prop_assert!(b.density >= a.density);
    }

    #[test]
    fn density_non_decreasing_in_rho(
        phi in unit(),
        tau in unit(),
        lo in unit(),
        hi in unit(),
        entropy in unit(),
        kappa in unit(),
    ) {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let a = calculate_density(&Invariants::new(phi, tau, lo, entropy, kappa).unwrap());
        let b = calculate_density(&Invariants::new(phi, tau, hi, entropy, kappa).unwrap());
        prop_assert!(b.density >= a.density);
    }
}

// ── Breakdown consistency & purity ───────────────────────────────────────

proptest! {
    #[test]
    fn breakdown_composes_exactly(
        phi in unit(),
        tau in unit(),
        rho in unit(),
        entropy in unit(),
        kappa in unit(),
    ) {
        let p = Invariants::new(phi, tau, rho, entropy, kappa).unwrap();
        let r = calculate_density(&p);
        prop_assert_eq!(
            r.entropy_modulator.to_bits(),
            (r.entropy_penalty + r.coherence_recovery).to_bits()
        );
        prop_assert_eq!(
            r.density.to_bits(),
            (r.structural_base * r.entropy_modulator).to_bits()
        );
    }

    #[test]
    fn repeated_calls_are_bit_identical(
        phi in unit(),
        tau in unit(),
        rho in unit(),
        entropy in unit(),
        kappa in unit(),
    ) {
        let engine = DensityEngine::new();
        let p = Invariants::new(phi, tau, rho, entropy, kappa).unwrap();
        let first = engine.calculate(&p);
        let second = engine.calculate(&p);
        prop_assert_eq!(first.density.to_bits(), second.density.to_bits());
        prop_assert_eq!(first, second);
    }
}

// ── Clamping equivalence ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn out_of_range_equals_clamped(
        phi in -1.0f64..=2.0,
        tau in -1.0f64..=2.0,
        rho in -1.0f64..=2.0,
        entropy in -1.0f64..=2.0,
        kappa in -1.0f64..=2.0,
    ) {
        let raw = Invariants::new(phi, tau, rho, entropy, kappa).unwrap();
        let clamped = raw.clamped();
        prop_assert_eq!(calculate_density(&raw), calculate_density(&clamped));
    }
}
