use conduit_core::Preset;
use conduit_density::DensityEngine;
use serde::Serialize;
use ts_rs::TS;

/// A catalog entry decorated with its computed density, for comparison
/// views.
#[derive(Debug, Clone, Copy, Serialize, TS)]
#[ts(export)]
pub struct SpectrumEntry {
    pub preset: &'static Preset,
    pub density: f64,
}

/// The full catalog ordered by ascending density.
///
/// Preset values are finite constants, so `total_cmp` gives a stable,
/// deterministic ordering.
pub fn spectrum() -> Vec<SpectrumEntry> {
    let engine = DensityEngine::new();
    let mut entries: Vec<SpectrumEntry> = conduit_presets::all()
        .iter()
        .map(|preset| SpectrumEntry {
            preset,
            density: engine.calculate(&preset.invariants).density,
        })
        .collect();
    entries.sort_by(|a, b| a.density.total_cmp(&b.density));
    entries
}
