//! # conduit-presets
//!
//! Fixed, ordered catalog of named reference parameter sets ("presets"),
//! each a full set of the five invariants plus category and description.
//!
//! The catalog is static read-only data: created at compile time, never
//! mutated. Loading a preset into an editable parameter set is a copy.
//!
//! Every numeric value here is an informed estimate, not a measurement —
//! see [`ESTIMATES_DISCLAIMER`].

pub mod catalog;

pub use catalog::{all, by_category, by_name, ESTIMATES_DISCLAIMER, PRESETS};
