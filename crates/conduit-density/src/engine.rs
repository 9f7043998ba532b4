use conduit_core::traits::IDensityEngine;
use conduit_core::{DensityResult, EngineConfig, Invariants};
use tracing::debug;

use crate::{formula, interpretation, warnings};

/// The density engine: clamps, computes the formula terms, then derives the
/// interpretation band and advisory warnings.
///
/// Pure and stateless apart from its config; safe to share across call
/// sites with no coordination.
pub struct DensityEngine {
    config: EngineConfig,
}

impl DensityEngine {
    /// Create an engine with the default band edges and warning thresholds.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Create an engine with a custom configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Calculate density with the full structured result.
    ///
    /// Out-of-range fields are clamped to [0.0, 1.0] first; that is the
    /// defined recovery policy, not a reported failure.
    pub fn calculate(&self, params: &Invariants) -> DensityResult {
        let clamped = params.clamped();
        let terms = formula::compute(&clamped);

        let interpretation = interpretation::classify(
            terms.density,
            clamped.has_structural_zero(),
            &self.config.bands,
        );
        let warnings = warnings::derive(&clamped, &self.config.warnings);

        debug!(
            density = terms.density,
            %interpretation,
            warning_count = warnings.len(),
            "calculated perspectival density"
        );

        DensityResult {
            density: terms.density,
            structural_base: terms.structural_base,
            entropy_penalty: terms.entropy_penalty,
            coherence_recovery: terms.coherence_recovery,
            entropy_modulator: terms.entropy_modulator,
            interpretation,
            warnings,
        }
    }

    /// Calculate a batch of parameter sets in input order.
    pub fn calculate_many(&self, batch: &[Invariants]) -> Vec<DensityResult> {
        batch.iter().map(|p| self.calculate(p)).collect()
    }
}

impl Default for DensityEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IDensityEngine for DensityEngine {
    fn calculate(&self, params: &Invariants) -> DensityResult {
        DensityEngine::calculate(self, params)
    }
}

/// Calculate density with the default configuration.
///
/// The canonical entry point for callers that do not carry an engine.
pub fn calculate_density(params: &Invariants) -> DensityResult {
    DensityEngine::new().calculate(params)
}
