//! Aggregate evaluation report for a full dataset pass.

use burn::{
    prelude::*,
    tensor::{backend::Backend, ElementConversion, Tensor},
};
use serde::Serialize;

use crate::{
    confusion::{check_same_shape, ConfusionTotals},
    error::MetricResult,
    mcc::matthews_corrcoef,
};

/// Evaluation metrics for one predicted-vs-true label matrix pair.
///
/// `precision`, `recall`, and `f1_score` are micro-averaged over every
/// `(sample, class)` cell. The counts are pooled totals over all classes,
/// and `accuracy` is `(TP + TN) / total_cells` derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricsReport {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub mcc: f64,
    pub true_positives: i64,
    pub false_positives: i64,
    pub false_negatives: i64,
    pub true_negatives: i64,
}

/// Computes the full metric set from two binary label matrices with shape
/// `[num_samples, num_classes]`.
///
/// Pure and side-effect free. Fails fast on a shape mismatch; degenerate
/// denominators (no predicted positives, no actual positives, zero cells,
/// vanishing MCC denominator) all yield `0.0` instead of NaN.
pub fn calculate_metrics<B: Backend>(
    true_labels: Tensor<B, 2, Int>,
    predictions: Tensor<B, 2, Int>,
) -> MetricResult<MetricsReport> {
    check_same_shape(&true_labels, &predictions)?;

    // Micro-averaged ratios from counts pooled over every cell at once.
    let tp = (predictions.clone() * true_labels.clone())
        .sum()
        .into_scalar()
        .elem::<i64>() as f64;
    let predicted_positives = predictions.clone().sum().into_scalar().elem::<i64>() as f64;
    let actual_positives = true_labels.clone().sum().into_scalar().elem::<i64>() as f64;

    let precision = if predicted_positives > 0.0 {
        tp / predicted_positives
    } else {
        0.0
    };
    let recall = if actual_positives > 0.0 {
        tp / actual_positives
    } else {
        0.0
    };
    let f1_score = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };

    // MCC over the raveled matrices: every cell is one observation.
    let mcc = matthews_corrcoef(
        true_labels.clone().flatten::<1>(0, 1),
        predictions.clone().flatten::<1>(0, 1),
    )?;

    // The per-class loop is kept as an independent computation path; the
    // accuracy it yields cross-checks the pooled ratios above.
    let totals = ConfusionTotals::from_label_matrices(true_labels, predictions)?;

    Ok(MetricsReport {
        accuracy: totals.accuracy(),
        precision,
        recall,
        f1_score,
        mcc,
        true_positives: totals.true_positives,
        false_positives: totals.false_positives,
        false_negatives: totals.false_negatives,
        true_negatives: totals.true_negatives,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MetricError;
    use burn::backend::NdArray;

    type TestBackend = NdArray;

    #[test]
    fn end_to_end_fixture() {
        let device = Default::default();
        let truth = Tensor::<TestBackend, 2, Int>::from_ints(
            [[1, 0], [0, 1], [1, 1], [0, 0]],
            &device,
        );
        let preds = Tensor::<TestBackend, 2, Int>::from_ints(
            [[1, 0], [0, 0], [1, 1], [0, 1]],
            &device,
        );

        let report = calculate_metrics(truth, preds).unwrap();

        assert_eq!(report.true_positives, 3);
        assert_eq!(report.false_positives, 1);
        assert_eq!(report.false_negatives, 1);
        assert_eq!(report.true_negatives, 3);
        assert!((report.accuracy - 0.75).abs() < 1e-12);
        assert!((report.precision - 0.75).abs() < 1e-12);
        assert!((report.recall - 0.75).abs() < 1e-12);
        assert!((report.f1_score - 0.75).abs() < 1e-12);
        assert!((report.mcc - 0.5).abs() < 1e-12);
    }

    #[test]
    fn perfect_predictions() {
        let device = Default::default();
        let truth = Tensor::<TestBackend, 2, Int>::from_ints([[1, 0], [0, 1]], &device);

        let report = calculate_metrics(truth.clone(), truth).unwrap();

        assert_eq!(report.false_positives, 0);
        assert_eq!(report.false_negatives, 0);
        assert!((report.accuracy - 1.0).abs() < 1e-12);
        assert!((report.mcc - 1.0).abs() < 1e-12);
    }

    #[test]
    fn complete_disagreement() {
        let device = Default::default();
        let truth = Tensor::<TestBackend, 2, Int>::from_ints([[1, 1], [1, 1]], &device);
        let preds = Tensor::<TestBackend, 2, Int>::from_ints([[0, 0], [0, 0]], &device);

        let report = calculate_metrics(truth, preds).unwrap();

        assert_eq!(report.true_positives, 0);
        assert_eq!(report.true_negatives, 0);
        assert_eq!(report.accuracy, 0.0);
        assert_eq!(report.precision, 0.0);
        assert_eq!(report.recall, 0.0);
        assert_eq!(report.f1_score, 0.0);
        // Predictions have no variance, so the MCC denominator vanishes.
        assert_eq!(report.mcc, 0.0);
    }

    #[test]
    fn micro_ratios_match_pooled_counts() {
        let device = Default::default();
        let truth = Tensor::<TestBackend, 2, Int>::from_ints(
            [[1, 0], [0, 1], [1, 1], [0, 0]],
            &device,
        );
        let preds = Tensor::<TestBackend, 2, Int>::from_ints(
            [[1, 1], [0, 1], [1, 0], [0, 0]],
            &device,
        );

        let report = calculate_metrics(truth, preds).unwrap();

        let tp = report.true_positives as f64;
        let fp = report.false_positives as f64;
        let fn_count = report.false_negatives as f64;
        assert!((report.precision - tp / (tp + fp)).abs() < 1e-12);
        assert!((report.recall - tp / (tp + fn_count)).abs() < 1e-12);
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        let device = Default::default();
        let truth = Tensor::<TestBackend, 2, Int>::from_ints([[1, 0], [0, 1]], &device);
        let preds = Tensor::<TestBackend, 2, Int>::from_ints([[1, 0]], &device);

        let result = calculate_metrics(truth, preds);

        assert!(matches!(result, Err(MetricError::ShapeMismatch { .. })));
    }
}
