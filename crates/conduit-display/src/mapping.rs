use conduit_core::{DensityResult, Invariants};
use serde::Serialize;
use ts_rs::TS;

/// Hue used when high entropy is structured (κ high): purple.
const HUE_STRUCTURED_CHAOS: f64 = 280.0;
/// Hue used otherwise: blue/white clarity.
const HUE_CLARITY: f64 = 200.0;

/// Visual parameters derived from a density result and the raw invariants.
///
/// Size tracks integration, brightness tracks D, blur tracks unstructured
/// noise H×(1−κ), flicker tracks weak binding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct DisplayParams {
    /// True when any structural invariant is exactly zero — render the
    /// collapsed state instead of the sphere.
    pub collapsed: bool,
    /// Opacity/luminance in [0.1, 1.0] (floored so the sphere stays visible).
    pub brightness: f64,
    /// Sphere diameter in display units: 40 + φ·60.
    pub size: f64,
    /// Blur radius: H·(1−κ)·20.
    pub blur: f64,
    /// HSL hue: purple for structured chaos, blue otherwise.
    pub hue: f64,
    /// HSL saturation percentage.
    pub saturation: f64,
    /// Flicker strength in [0, 1]; zero means a steady sphere.
    pub flicker: f64,
}

/// Map a result and its inputs to display parameters. Pure and stateless.
pub fn map_display(result: &DensityResult, params: &Invariants) -> DisplayParams {
    let params = params.clamped();
    let collapsed = params.has_structural_zero();

    let brightness = result.density.max(0.1);
    let size = 40.0 + params.phi * 60.0;

    let effective_noise = params.entropy * (1.0 - params.kappa);
    let blur = effective_noise * 20.0;

    let structured_chaos = params.entropy > 0.5 && params.kappa > 0.5;
    let hue = if structured_chaos {
        HUE_STRUCTURED_CHAOS
    } else {
        HUE_CLARITY
    };
    let saturation = if params.entropy > 0.5 {
        params.kappa * 100.0
    } else {
        20.0
    };

    let flicker = if params.rho < 0.2 {
        (0.2 - params.rho) * 5.0
    } else {
        0.0
    };

    DisplayParams {
        collapsed,
        brightness,
        size,
        blur,
        hue,
        saturation,
        flicker,
    }
}
