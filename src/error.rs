//! Error type shared by the engine and the registry.

use thiserror::Error;

/// Errors raised by engine construction, rule selection, and stepping.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    /// No rule set with this name is registered.
    #[error("unknown rule set {name:?}")]
    UnknownRuleSet { name: String },

    /// Grid extents must both be positive.
    #[error("invalid grid dimensions {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Palette scale factors must lie in [0, 1].
    #[error("palette channel {channel} value {value} must be between 0.0 and 1.0")]
    InvalidPalette { channel: usize, value: f64 },

    /// A step produced NaN or infinity. The field keeps its previous state.
    #[error("rule set {rule:?} produced non-finite value {value} at ({row}, {col})")]
    NonFiniteResult {
        rule: String,
        row: usize,
        col: usize,
        value: f64,
    },

    /// A rule set with this name is already registered.
    #[error("rule set {name:?} is already registered")]
    DuplicateRuleSet { name: String },

    /// The activation tests scores for exact equality, so the kernel must be integral.
    #[error("rule set {name:?} needs integer kernel weights for its activation")]
    NonIntegralKernel { name: String },

    /// The rayon worker pool could not be created.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),
}

impl From<rayon::ThreadPoolBuildError> for EngineError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        EngineError::ThreadPool(err.to_string())
    }
}
