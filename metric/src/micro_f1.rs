//! Streaming micro-averaged F1 metric for training dashboards.
//!
//! Pools TP/FP/FN counts across batches so the displayed value is the exact
//! micro F1 of everything seen since the last `clear`, not an average of
//! per-batch scores.

use std::marker::PhantomData;

use burn::{
    prelude::*,
    tensor::{activation::sigmoid, backend::Backend, ElementConversion, Tensor},
    train::metric::{Metric, MetricEntry, MetricMetadata, Numeric},
};

/// Input for [`MicroF1Metric`].
pub struct MultiLabelInput<B: Backend> {
    /// Raw model outputs (logits) with shape `[batch_size, num_classes]`.
    pub outputs: Tensor<B, 2>,
    /// Binary targets with shape `[batch_size, num_classes]`.
    pub targets: Tensor<B, 2, Int>,
}

impl<B: Backend> MultiLabelInput<B> {
    pub const fn new(outputs: Tensor<B, 2>, targets: Tensor<B, 2, Int>) -> Self {
        Self { outputs, targets }
    }
}

#[derive(Config, Debug)]
pub struct MicroF1MetricConfig {
    /// Decision threshold applied after sigmoid, with strict `>` semantics.
    #[config(default = 0.5)]
    pub threshold: f32,
}

#[derive(Debug, Clone)]
pub struct MicroF1Metric<B: Backend> {
    state: MicroF1State,
    threshold: f32,
    _b: PhantomData<B>,
}

#[derive(Debug, Clone, Default)]
struct MicroF1State {
    true_positives: i64,
    predicted_positives: i64,
    actual_positives: i64,
    count: usize,
}

impl MicroF1MetricConfig {
    pub fn init<B: Backend>(&self) -> MicroF1Metric<B> {
        MicroF1Metric {
            state: MicroF1State::default(),
            threshold: self.threshold,
            _b: PhantomData,
        }
    }
}

impl<B: Backend> Default for MicroF1Metric<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Backend> MicroF1Metric<B> {
    pub fn new() -> Self {
        MicroF1MetricConfig::new().init()
    }

    fn update_stats(&mut self, outputs: Tensor<B, 2>, targets: Tensor<B, 2, Int>) {
        let probabilities = sigmoid(outputs.clone());
        let predictions = probabilities.greater_elem(self.threshold).int();

        let tp = (predictions.clone() * targets.clone())
            .sum()
            .into_scalar()
            .elem::<i64>();
        let predicted_positives = predictions.sum().into_scalar().elem::<i64>();
        let actual_positives = targets.sum().into_scalar().elem::<i64>();

        self.state.true_positives += tp;
        self.state.predicted_positives += predicted_positives;
        self.state.actual_positives += actual_positives;
        self.state.count += outputs.dims()[0];
    }

    fn f1_value(&self) -> f64 {
        if self.state.count == 0 {
            return 0.0;
        }
        let tp = self.state.true_positives as f64;
        let predicted = self.state.predicted_positives as f64;
        let actual = self.state.actual_positives as f64;

        let precision = if predicted > 0.0 { tp / predicted } else { 0.0 };
        let recall = if actual > 0.0 { tp / actual } else { 0.0 };
        if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        }
    }
}

impl<B: Backend> Metric for MicroF1Metric<B> {
    type Input = MultiLabelInput<B>;

    fn name(&self) -> String {
        "Micro-F1".to_string()
    }

    fn update(&mut self, item: &Self::Input, _metadata: &MetricMetadata) -> MetricEntry {
        self.update_stats(item.outputs.clone(), item.targets.clone());
        let value = self.f1_value();
        MetricEntry::new(self.name(), format!("{value:.5}"), format!("{value:.5}"))
    }

    fn clear(&mut self) {
        self.state = MicroF1State::default();
    }
}

impl<B: Backend> Numeric for MicroF1Metric<B> {
    fn value(&self) -> f64 {
        self.f1_value()
    }
}
