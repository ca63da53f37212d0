//! Error types for wellcdf-core
//!
//! Every pipeline failure is a deterministic function of its input: a run
//! that fails here fails the same way when repeated.

use thiserror::Error;
use wellcdf_io::IoError;

use crate::config::ConfigError;

/// Main error type for wellcdf operations
#[derive(Error, Debug)]
pub enum WellCdfError {
    /// The measure cannot be split into four non-empty equal-frequency bins
    #[error("Cannot form quartiles of '{measure}': {reason}")]
    DegenerateBinning { measure: String, reason: String },

    /// The selected ECDF parameter is not a numeric column
    #[error("Selected parameter '{parameter}' is not numeric")]
    NonNumericParameter { parameter: String },

    /// The performance measure is not a numeric column
    #[error("Performance measure '{measure}' is not numeric")]
    NonNumericMeasure { measure: String },

    /// Column not found
    #[error("Column '{column}' not found in dataset")]
    ColumnNotFound { column: String },

    /// A well identifier occurs more than once
    #[error("Duplicate well identifier '{key}'")]
    DuplicateKey { key: String },

    /// A row has no well identifier
    #[error("Row {row} has no value in key column '{key_column}'")]
    MissingKey { row: usize, key_column: String },

    /// Structurally invalid dataset
    #[error("Invalid dataset: {message}")]
    InvalidDataset { message: String },

    /// Loading errors
    #[error("Failed to load dataset: {0}")]
    Io(#[from] IoError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Serialization errors
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl WellCdfError {
    /// Message suitable for showing to the person making a selection
    pub fn user_message(&self) -> String {
        match self {
            WellCdfError::NonNumericParameter { .. } => {
                "Error: Selected parameter is not numeric.".to_string()
            }
            other => format!("Error: {}.", other),
        }
    }
}

/// Result type alias for wellcdf operations
pub type WellCdfResult<T> = Result<T, WellCdfError>;
