use std::path::PathBuf;

/// Result alias used across the workspace.
pub type ConduitResult<T> = Result<T, ConduitError>;

/// Errors produced by the Conduit core.
///
/// Out-of-range finite values are never errors — they are clamped to the
/// invariant domain. Only genuinely non-numeric input (NaN) and config
/// loading failures surface here.
#[derive(Debug, thiserror::Error)]
pub enum ConduitError {
    #[error("invariant `{field}` is NaN; all five invariants must be numeric")]
    NotANumber { field: &'static str },

    #[error("failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
