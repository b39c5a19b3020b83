//! Thresholded model evaluation.
//!
//! Drives a scoring model over a dataset, binarizes the resulting
//! probabilities against per-class thresholds, and aggregates classification
//! metrics over the entire run in a single pass.

use burn::{
    module::AutodiffModule,
    prelude::*,
    tensor::{
        activation::sigmoid,
        backend::{AutodiffBackend, Backend},
        Tensor,
    },
};
use mleval_metric::{calculate_metrics, MetricsReport};

use crate::{
    dataset::MultiLabelBatch,
    error::{EvalError, EvalResult},
    thresholds::Thresholds,
};

/// A trained model's scoring capability.
///
/// Implementations must be free of training-time behavior (gradient
/// tracking, dropout-style stochasticity); for autodiff-backed modules, use
/// [`in_inference_mode`] to obtain such a view.
pub trait ScoringModel<B: Backend> {
    /// Returns raw scores (logits) with shape `[batch_size, num_classes]`.
    fn score(&self, features: Tensor<B, 2>) -> Tensor<B, 2>;
}

impl<B: Backend, F> ScoringModel<B> for F
where
    F: Fn(Tensor<B, 2>) -> Tensor<B, 2>,
{
    fn score(&self, features: Tensor<B, 2>) -> Tensor<B, 2> {
        self(features)
    }
}

/// Configuration for [`ModelEvaluator`].
#[derive(Config, Debug)]
pub struct EvaluatorConfig {
    /// Apply sigmoid to model outputs before thresholding. Disable when the
    /// model already emits probabilities.
    #[config(default = true)]
    pub apply_sigmoid: bool,
}

impl EvaluatorConfig {
    pub fn init<B: Backend, M: ScoringModel<B>>(
        &self,
        model: M,
        thresholds: Thresholds,
        device: B::Device,
    ) -> ModelEvaluator<B, M> {
        ModelEvaluator {
            model,
            thresholds,
            apply_sigmoid: self.apply_sigmoid,
            device,
        }
    }
}

/// Evaluates a scoring model against per-class decision thresholds.
pub struct ModelEvaluator<B: Backend, M: ScoringModel<B>> {
    model: M,
    thresholds: Thresholds,
    apply_sigmoid: bool,
    device: B::Device,
}

impl<B: Backend, M: ScoringModel<B>> ModelEvaluator<B, M> {
    /// Creates an evaluator with the default configuration.
    pub fn new(model: M, thresholds: Thresholds, device: B::Device) -> Self {
        EvaluatorConfig::new().init(model, thresholds, device)
    }

    /// Scores every batch, binarizes the probabilities with strict `>`
    /// per-class thresholds, and aggregates metrics over the whole dataset.
    ///
    /// Per-batch predictions and true labels are concatenated in yield
    /// order, so the rows of the stacked label matrices line up with the
    /// dataset's sample order.
    ///
    /// Fails with [`EvalError::ThresholdCountMismatch`] if the model's class
    /// count does not match the threshold vector, and with
    /// [`EvalError::EmptyDataset`] if the loader yields no batches.
    pub fn evaluate<I>(&self, loader: I) -> EvalResult<MetricsReport>
    where
        I: IntoIterator<Item = MultiLabelBatch<B>>,
    {
        let mut true_labels = Vec::new();
        let mut predictions = Vec::new();

        for batch in loader {
            let features = batch.features.to_device(&self.device);
            let labels = batch.labels.to_device(&self.device);

            let logits = self.model.score(features);
            let probabilities = if self.apply_sigmoid {
                sigmoid(logits)
            } else {
                logits
            };

            predictions.push(self.thresholds.binarize(probabilities)?);
            true_labels.push(labels);
        }

        if true_labels.is_empty() {
            return Err(EvalError::EmptyDataset);
        }

        let true_labels = Tensor::cat(true_labels, 0);
        let predictions = Tensor::cat(predictions, 0);

        Ok(calculate_metrics(true_labels, predictions)?)
    }
}

/// Runs a closure against the gradient-free view of an autodiff-backed
/// module.
///
/// The inference-mode module exists only for the duration of the closure and
/// the training module itself is never mutated, so there is no mode left to
/// restore on any exit path.
pub fn in_inference_mode<B, M, R>(module: &M, run: impl FnOnce(&M::InnerModule) -> R) -> R
where
    B: AutodiffBackend,
    M: AutodiffModule<B>,
{
    let inference = module.valid();
    run(&inference)
}
