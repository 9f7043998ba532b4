//! # conduit-display
//!
//! Stateless presentation mapping layered on top of the engine's output.
//! The engine itself has zero knowledge of this crate; callers feed a
//! [`DensityResult`] plus the raw invariants in and render whatever comes
//! back. Display-side smoothing or animation stays in the caller and is
//! never fed back into the canonical parameter set.

pub mod mapping;
pub mod spectrum;

pub use mapping::{map_display, DisplayParams};
pub use spectrum::{spectrum, SpectrumEntry};
