//! # conduit-core
//!
//! Foundation crate for the Conduit perspectival density engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod invariants;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::EngineConfig;
pub use errors::{ConduitError, ConduitResult};
pub use invariants::Invariants;
pub use models::{Category, DensityResult, Interpretation, Preset};
