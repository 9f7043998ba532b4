use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{ConduitError, ConduitResult};

/// Ascending band edges for interpretation classification.
///
/// Comparisons are strict `<`: a D exactly on an edge falls into the band
/// above it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpretationBands {
    pub barely_present: f64,
    pub faint: f64,
    pub moderate: f64,
    pub clear: f64,
}

impl Default for InterpretationBands {
    fn default() -> Self {
        Self {
            barely_present: defaults::BAND_BARELY_PRESENT,
            faint: defaults::BAND_FAINT,
            moderate: defaults::BAND_MODERATE,
            clear: defaults::BAND_CLEAR,
        }
    }
}

/// Thresholds for the advisory warning rules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct WarningThresholds {
    /// Entropy above this, with coherence below `low_coherence`, is
    /// dissolution-like.
    pub high_entropy: f64,
    pub low_coherence: f64,
    /// Binding below this triggers the minimal-self-reference advisory.
    pub low_binding: f64,
    /// Coherence above this is flagged as poorly constrained.
    pub high_coherence: f64,
}

impl Default for WarningThresholds {
    fn default() -> Self {
        Self {
            high_entropy: defaults::WARN_HIGH_ENTROPY,
            low_coherence: defaults::WARN_LOW_COHERENCE,
            low_binding: defaults::WARN_LOW_BINDING,
            high_coherence: defaults::WARN_HIGH_COHERENCE,
        }
    }
}

/// Density engine configuration.
///
/// The formula itself is fixed; only the interpretation band edges and the
/// warning-rule thresholds are tunable.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub bands: InterpretationBands,
    pub warnings: WarningThresholds,
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> ConduitResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConduitError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConduitError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
