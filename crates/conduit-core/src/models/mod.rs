pub mod density_result;
pub mod preset;

pub use density_result::{DensityResult, Interpretation};
pub use preset::{Category, Preset};
