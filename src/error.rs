//! Error types for the milkcast library.

use thiserror::Error;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, MilkcastError>;

/// Errors that can occur while loading data or running the pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MilkcastError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Required column is absent from the CSV header.
    #[error("missing required column: `{label}`")]
    MissingColumn { label: String },

    /// A production cell could not be parsed as a finite number.
    #[error("non-numeric production value at line {line}: `{value}`")]
    NonNumericValue { line: usize, value: String },

    /// Date index present but not interpretable as a date.
    #[error("malformed timestamp: {0}")]
    MalformedTimestamp(String),

    /// Train or test partition came out empty.
    #[error("degenerate split: train has {train} points, test has {test}")]
    DegenerateSplit { train: usize, test: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Model has not been fitted yet.
    #[error("model must be fitted before prediction")]
    FitRequired,

    /// Index out of bounds.
    #[error("index out of bounds: {index} (size: {size})")]
    IndexOutOfBounds { index: usize, size: usize },

    /// Underlying CSV reader failure.
    #[error("csv error: {0}")]
    Csv(String),
}
