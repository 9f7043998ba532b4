/// Conduit system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lower bound of every invariant's domain.
pub const INVARIANT_MIN: f64 = 0.0;

/// Upper bound of every invariant's domain.
pub const INVARIANT_MAX: f64 = 1.0;
