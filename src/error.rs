//! Error types for layered neighborhood search.

use thiserror::Error;

/// Result type alias for u-gns operations.
pub type Result<T> = std::result::Result<T, GnsError>;

/// Errors surfaced by the search components.
///
/// None of these are retried: everything in this crate is deterministic
/// numeric computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GnsError {
    /// Dimension is zero, or two inputs disagree on dimensionality.
    #[error("invalid dimension: expected {expected}, got {got}")]
    InvalidDimension {
        /// The dimension the run was configured with.
        expected: usize,
        /// The dimension actually supplied.
        got: usize,
    },

    /// An interval with `low > high` or a non-finite edge.
    #[error("invalid bounds: low ({low}) must be finite and <= high ({high})")]
    InvalidBounds {
        /// Lower edge.
        low: f64,
        /// Upper edge.
        high: f64,
    },

    /// Zero cells, zero layers, or a range that cannot be partitioned.
    #[error("invalid partition: {0}")]
    InvalidPartition(String),

    /// A layer produced no usable neighborhoods.
    #[error("layer {layer} has no usable neighborhoods")]
    EmptyNeighborhoodSet {
        /// Index of the layer, innermost = 0.
        layer: usize,
    },

    /// The requested search strategy is not implemented.
    #[error("unsupported search algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The requested benchmark function is not known.
    #[error("unknown cost function: {0}")]
    UnknownCostFunction(String),

    /// The objective produced NaN or an infinity where a finite cost is required.
    #[error("objective is not finite at {point:?}")]
    NonFiniteObjective {
        /// The offending point.
        point: Vec<f64>,
    },

    /// A configuration parameter is out of range.
    #[error("configuration error: {0}")]
    InvalidConfig(String),

    /// Every layer came back without a solution.
    #[error("no layer produced a solution")]
    NoSolution,
}
