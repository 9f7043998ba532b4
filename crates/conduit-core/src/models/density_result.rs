use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Six-band classification of a density score.
///
/// `Collapsed` is reserved for an exact structural zero; the remaining bands
/// are ascending strict-`<` cutoffs over D (see `EngineConfig::bands`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Interpretation {
    Collapsed,
    BarelyPresent,
    Faint,
    Moderate,
    Clear,
    Vivid,
}

impl Interpretation {
    /// Fixed human-readable sentence for this band.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Collapsed => {
                "Perspective collapsed. Zero in any structural invariant (φ, τ, ρ) \
                 produces zero density."
            }
            Self::BarelyPresent => {
                "Dim, unstable, barely present. Approaching the threshold of non-experience."
            }
            Self::Faint => "Faint presence. Fragmentary awareness, degraded continuity.",
            Self::Moderate => "Moderate presence. Functional but not optimal awareness.",
            Self::Clear => "Clear, stable presence. Coherent experience with good integration.",
            Self::Vivid => {
                "Vivid, intensely present. High integration, deep binding, clear signal."
            }
        }
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full output of a density calculation: the score, the sub-term breakdown,
/// and the derived interpretation and advisory warnings.
///
/// Consumers render these fields as-is; nothing here is meant to be
/// recomputed downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DensityResult {
    /// D — the final perspectival density score.
    #[serde(rename = "D")]
    pub density: f64,
    /// φ × τ × ρ.
    pub structural_base: f64,
    /// 1 − √H.
    pub entropy_penalty: f64,
    /// H × κ.
    pub coherence_recovery: f64,
    /// entropy_penalty + coherence_recovery — the bracketed factor.
    pub entropy_modulator: f64,
    /// Band classification of D (collapsed when any structural dim is zero).
    pub interpretation: Interpretation,
    /// Advisory strings in fixed rule-declaration order. Not errors.
    pub warnings: Vec<String>,
}
