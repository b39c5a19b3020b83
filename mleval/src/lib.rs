//! # mleval-burn
//!
//! Thresholded evaluation of trained binary multi-label classifiers using
//! the Burn framework.
//!
//! Given a scoring model, per-class decision thresholds, and an iterable of
//! batches, [`ModelEvaluator`] binarizes the model's sigmoid probabilities
//! (strict `>` against each class threshold), stacks predictions and true
//! labels across the dataset, and reports accuracy, micro-averaged
//! precision/recall/F1, MCC, and pooled confusion counts as a
//! [`MetricsReport`].
//!
//! Threshold selection, training, and model architecture are out of scope;
//! this is a library call, not a standalone program.

mod dataset;
mod error;
mod evaluator;
mod thresholds;


pub use dataset::{MultiLabelBatch, MultiLabelBatcher, MultiLabelItem};
pub use error::{EvalError, EvalResult};
pub use evaluator::{in_inference_mode, EvaluatorConfig, ModelEvaluator, ScoringModel};
pub use thresholds::Thresholds;

pub use mleval_metric::{
    calculate_metrics, matthews_corrcoef, ConfusionTotals, MetricError, MetricResult,
    MetricsReport,
};
#[cfg(feature = "train")]
pub use mleval_metric::{MicroF1Metric, MicroF1MetricConfig, MultiLabelInput};
