//! Canonical default values for the engine's tunable constants.
//!
//! Band edges and warning thresholds match the values observed in the
//! original calculator UI. They are deliberate cutoffs, surfaced here so a
//! deployment can override them via config instead of patching the formula.

/// D below this is "barely present".
pub const BAND_BARELY_PRESENT: f64 = 0.1;
/// D below this is "faint".
pub const BAND_FAINT: f64 = 0.3;
/// D below this is "moderate".
pub const BAND_MODERATE: f64 = 0.5;
/// D below this is "clear"; at or above, "vivid".
pub const BAND_CLEAR: f64 = 0.7;

/// Entropy above this, combined with low coherence, reads as dissolution.
pub const WARN_HIGH_ENTROPY: f64 = 0.7;
/// Coherence below this counts as "low" for the dissolution rule.
pub const WARN_LOW_COHERENCE: f64 = 0.3;
/// Binding below this triggers the near-zero-ρ advisory.
pub const WARN_LOW_BINDING: f64 = 0.1;
/// Coherence above this is outside the well-estimated range.
pub const WARN_HIGH_COHERENCE: f64 = 0.9;
