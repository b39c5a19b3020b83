//! Pooled confusion counts for multi-label label matrices.
//!
//! Counts are accumulated per class and then summed across classes, matching
//! micro-average semantics where every `(sample, class)` cell is one binary
//! decision.

use burn::{
    prelude::*,
    tensor::{backend::Backend, ElementConversion, Tensor},
};

use crate::error::{MetricError, MetricResult};

/// Confusion-matrix totals pooled over all classes and samples.
///
/// Invariant: the four counts partition every cell, so
/// `total() == num_samples * num_classes` for the matrices they were built
/// from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfusionTotals {
    pub true_positives: i64,
    pub false_positives: i64,
    pub false_negatives: i64,
    pub true_negatives: i64,
}

impl ConfusionTotals {
    /// Accumulates confusion counts from two binary label matrices with
    /// shape `[num_samples, num_classes]` and entries in `{0, 1}`.
    ///
    /// Classes are summed one column at a time so the accumulation order
    /// stays stable if this is ever extended beyond hard binary labels.
    pub fn from_label_matrices<B: Backend>(
        true_labels: Tensor<B, 2, Int>,
        predictions: Tensor<B, 2, Int>,
    ) -> MetricResult<Self> {
        check_same_shape(&true_labels, &predictions)?;
        let [num_samples, num_classes] = true_labels.dims();

        let mut totals = Self::default();

        for class in 0..num_classes {
            let target = true_labels
                .clone()
                .slice([0..num_samples, class..class + 1]);
            let pred = predictions
                .clone()
                .slice([0..num_samples, class..class + 1]);

            let tp = (pred.clone() * target.clone())
                .sum()
                .into_scalar()
                .elem::<i64>();
            let predicted_positives = pred.sum().into_scalar().elem::<i64>();
            let actual_positives = target.sum().into_scalar().elem::<i64>();

            let fp = predicted_positives - tp;
            let fn_count = actual_positives - tp;
            let tn = num_samples as i64 - tp - fp - fn_count;

            totals.true_positives += tp;
            totals.false_positives += fp;
            totals.false_negatives += fn_count;
            totals.true_negatives += tn;
        }

        Ok(totals)
    }

    /// Total number of `(sample, class)` cells covered by the counts.
    pub const fn total(&self) -> i64 {
        self.true_positives + self.false_positives + self.false_negatives + self.true_negatives
    }

    /// Subset accuracy over all cells: `(TP + TN) / total`.
    ///
    /// Returns `0.0` when there are no cells.
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total > 0 {
            (self.true_positives + self.true_negatives) as f64 / total as f64
        } else {
            0.0
        }
    }
}

/// Fails fast when two tensors that must agree in shape do not.
pub(crate) fn check_same_shape<B: Backend, const D: usize>(
    expected: &Tensor<B, D, Int>,
    actual: &Tensor<B, D, Int>,
) -> MetricResult<()> {
    if expected.dims() != actual.dims() {
        return Err(MetricError::ShapeMismatch {
            expected: format!("{:?}", expected.dims()),
            actual: format!("{:?}", actual.dims()),
        });
    }
    Ok(())
}
