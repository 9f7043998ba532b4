use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::{INVARIANT_MAX, INVARIANT_MIN};
use crate::errors::{ConduitError, ConduitResult};

/// The five invariants describing a system's information-processing geometry.
///
/// φ, τ, ρ are *structural* dimensions — a zero in any of them collapses
/// density to exactly zero. H and κ are *modulating* dimensions — they shape
/// the entropy modulator but never independently zero the score.
///
/// All fields live in [0.0, 1.0]. The engine clamps before computing, so
/// slightly out-of-range values (e.g. slider drift) are tolerated. NaN is a
/// caller-contract violation and is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Invariants {
    /// φ — Integration. How unified is information across the system?
    pub phi: f64,
    /// τ — Temporal Depth. How much does the past constrain the present?
    pub tau: f64,
    /// ρ — Binding. Does the system observe its own states?
    pub rho: f64,
    /// H — Entropy. How much noise/chaos in the system?
    #[serde(rename = "H")]
    pub entropy: f64,
    /// κ — Coherence. Is the entropy structured or random?
    pub kappa: f64,
}

impl Invariants {
    /// Construct a parameter set, rejecting NaN in any field.
    ///
    /// Finite out-of-range values (and ±∞) are accepted here and clamped by
    /// the engine; NaN means a field is effectively missing, and downstream
    /// formula correctness depends on all five being present.
    pub fn new(phi: f64, tau: f64, rho: f64, entropy: f64, kappa: f64) -> ConduitResult<Self> {
        let fields = [
            ("phi", phi),
            ("tau", tau),
            ("rho", rho),
            ("entropy", entropy),
            ("kappa", kappa),
        ];
        for (field, value) in fields {
            if value.is_nan() {
                return Err(ConduitError::NotANumber { field });
            }
        }
        Ok(Self {
            phi,
            tau,
            rho,
            entropy,
            kappa,
        })
    }

    /// Return a copy with every field clamped to [0.0, 1.0].
    pub fn clamped(self) -> Self {
        Self {
            phi: self.phi.clamp(INVARIANT_MIN, INVARIANT_MAX),
            tau: self.tau.clamp(INVARIANT_MIN, INVARIANT_MAX),
            rho: self.rho.clamp(INVARIANT_MIN, INVARIANT_MAX),
            entropy: self.entropy.clamp(INVARIANT_MIN, INVARIANT_MAX),
            kappa: self.kappa.clamp(INVARIANT_MIN, INVARIANT_MAX),
        }
    }

    /// True when any structural dimension (φ, τ, ρ) is exactly zero.
    pub fn has_structural_zero(&self) -> bool {
        self.phi == 0.0 || self.tau == 0.0 || self.rho == 0.0
    }
}

impl Default for Invariants {
    /// Baseline awake human — the original calculator's starting point.
    fn default() -> Self {
        Self {
            phi: 0.85,
            tau: 0.8,
            rho: 0.7,
            entropy: 0.35,
            kappa: 0.7,
        }
    }
}

impl fmt::Display for Invariants {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "φ={:.2} τ={:.2} ρ={:.2} H={:.2} κ={:.2}",
            self.phi, self.tau, self.rho, self.entropy, self.kappa
        )
    }
}
