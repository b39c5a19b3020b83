use thiserror::Error;

/// The error type for `mleval-metric` operations.
#[derive(Error, Debug)]
pub enum MetricError {
    /// Error for when two label tensors that must agree in shape do not.
    /// Mismatched shapes are never padded, truncated, or broadcast.
    #[error("Label shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// The shape of the reference (true-label) tensor.
        expected: String,
        /// The shape of the offending tensor.
        actual: String,
    },
}

/// A specialized `Result` type for `mleval-metric` operations.
pub type MetricResult<T> = Result<T, MetricError>;
