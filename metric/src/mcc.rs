//! Matthews correlation coefficient over flattened label vectors.

use burn::{
    prelude::*,
    tensor::{backend::Backend, ElementConversion, Tensor},
};

use crate::{confusion::check_same_shape, error::MetricResult};

/// Matthews correlation coefficient of two binary label vectors.
///
/// Every element is treated as one independent binary observation, so
/// multi-label matrices must be flattened before calling this. Computed as
/// `(TP*TN - FP*FN) / sqrt((TP+FP)(TP+FN)(TN+FP)(TN+FN))` and defined as
/// `0.0` when the denominator vanishes, which happens whenever either vector
/// has no variance.
pub fn matthews_corrcoef<B: Backend>(
    true_labels: Tensor<B, 1, Int>,
    predictions: Tensor<B, 1, Int>,
) -> MetricResult<f64> {
    check_same_shape(&true_labels, &predictions)?;
    let [num_observations] = true_labels.dims();

    let tp = (predictions.clone() * true_labels.clone())
        .sum()
        .into_scalar()
        .elem::<i64>();
    let predicted_positives = predictions.sum().into_scalar().elem::<i64>();
    let actual_positives = true_labels.sum().into_scalar().elem::<i64>();

    let fp = (predicted_positives - tp) as f64;
    let fn_count = (actual_positives - tp) as f64;
    let tp = tp as f64;
    let tn = num_observations as f64 - tp - fp - fn_count;

    let denominator =
        ((tp + fp) * (tp + fn_count) * (tn + fp) * (tn + fn_count)).sqrt();
    if denominator == 0.0 {
        return Ok(0.0);
    }

    Ok((tp * tn - fp * fn_count) / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray;

    #[test]
    fn perfect_agreement_is_one() {
        let device = Default::default();
        let truth = Tensor::<TestBackend, 1, Int>::from_ints([1, 0, 1, 0], &device);

        let mcc = matthews_corrcoef(truth.clone(), truth).unwrap();

        assert!((mcc - 1.0).abs() < 1e-12);
    }

    #[test]
    fn complete_inversion_is_minus_one() {
        let device = Default::default();
        let truth = Tensor::<TestBackend, 1, Int>::from_ints([1, 1, 0, 0], &device);
        let preds = Tensor::<TestBackend, 1, Int>::from_ints([0, 0, 1, 1], &device);

        let mcc = matthews_corrcoef(truth, preds).unwrap();

        assert!((mcc + 1.0).abs() < 1e-12);
    }

    #[test]
    fn single_class_degenerate_is_zero() {
        let device = Default::default();
        let truth = Tensor::<TestBackend, 1, Int>::from_ints([1, 1, 1, 1], &device);

        let mcc = matthews_corrcoef(truth.clone(), truth).unwrap();

        assert_eq!(mcc, 0.0);
    }

    #[test]
    fn hand_computed_fixture() {
        // TP=3, FP=1, FN=1, TN=3 -> (9 - 1) / sqrt(4^4) = 0.5
        let device = Default::default();
        let truth =
            Tensor::<TestBackend, 1, Int>::from_ints([1, 0, 0, 1, 1, 1, 0, 0], &device);
        let preds =
            Tensor::<TestBackend, 1, Int>::from_ints([1, 0, 0, 0, 1, 1, 0, 1], &device);

        let mcc = matthews_corrcoef(truth, preds).unwrap();

        assert!((mcc - 0.5).abs() < 1e-12);
    }
}
