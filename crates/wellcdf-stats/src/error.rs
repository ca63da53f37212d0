//! Error types for statistical operations

use thiserror::Error;

/// Errors raised by binning and quantile computations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error("Cannot bin an empty sample")]
    EmptySample,

    #[error("Number of bins must be at least 1, got {0}")]
    InvalidBinCount(usize),

    #[error("Quantile level {0} is outside [0, 1]")]
    InvalidQuantile(f64),

    #[error("Bin edges must be unique: {edges:?}")]
    DuplicateEdges { edges: Vec<f64> },

    #[error("Bin {bin} is empty (edges {edges:?})")]
    EmptyBin { bin: usize, edges: Vec<f64> },
}

/// Result type for statistical operations
pub type StatsResult<T> = Result<T, StatsError>;
