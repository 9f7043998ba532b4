use conduit_core::config::InterpretationBands;
use conduit_core::Interpretation;

/// Classify a density score into one of the six interpretation bands.
///
/// `structural_zero` takes precedence: an exact zero in φ, τ, or ρ is
/// `Collapsed` even though D is also 0.0 there. The remaining bands use
/// strict `<` against the ascending edges, so a score exactly on an edge
/// lands in the band above it.
pub fn classify(density: f64, structural_zero: bool, bands: &InterpretationBands) -> Interpretation {
    if structural_zero {
        return Interpretation::Collapsed;
    }
    if density < bands.barely_present {
        Interpretation::BarelyPresent
    } else if density < bands.faint {
        Interpretation::Faint
    } else if density < bands.moderate {
        Interpretation::Moderate
    } else if density < bands.clear {
        Interpretation::Clear
    } else {
        Interpretation::Vivid
    }
}
