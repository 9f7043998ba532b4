//! # conduit-density
//!
//! The perspectival density engine: a pure function from five invariants to
//! a score plus a full diagnostic breakdown.
//!
//! ```text
//! D = (φ × τ × ρ) × [(1 − √H) + (H × κ)]
//! ```
//!
//! ## Pieces
//! 1. **Terms** — structural base, entropy penalty, coherence recovery
//! 2. **Formula** — composition and breakdown
//! 3. **Interpretation** — six-band classification of D
//! 4. **Warnings** — ordered advisory rules over the raw inputs
//!
//! The engine clamps each invariant to [0.0, 1.0] before computing, never
//! performs I/O, and holds no mutable state: identical inputs produce
//! bit-identical results.

pub mod engine;
pub mod formula;
pub mod interpretation;
pub mod terms;
pub mod warnings;

pub use engine::{calculate_density, DensityEngine};
