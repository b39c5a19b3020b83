use mleval_metric::MetricError;
use thiserror::Error;

/// The error type for `mleval-burn` operations.
///
/// Evaluation is one-shot and deterministic: any of these aborts the run
/// entirely and is surfaced to the caller. There are no retries and no
/// partial results.
#[derive(Error, Debug)]
pub enum EvalError {
    /// Error for when the threshold vector length does not match the number
    /// of classes the model produces.
    #[error("Threshold count mismatch: {thresholds} thresholds for {classes} model output classes")]
    ThresholdCountMismatch {
        /// The number of thresholds supplied.
        thresholds: usize,
        /// The number of classes in the model's output.
        classes: usize,
    },

    /// Error for when a threshold value falls outside `[0, 1]`.
    #[error("Threshold at index {index} is outside [0, 1]: {value}")]
    InvalidThreshold {
        /// Position of the offending threshold.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Error for when the dataset yields no batches, leaving nothing to
    /// stack into a label matrix.
    #[error("Dataset yielded no batches; nothing to evaluate")]
    EmptyDataset,

    /// Error from the underlying metric computation.
    #[error(transparent)]
    Metric(#[from] MetricError),
}

/// A specialized `Result` type for `mleval-burn` operations.
pub type EvalResult<T> = Result<T, EvalError>;
