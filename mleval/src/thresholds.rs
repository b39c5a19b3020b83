//! Per-class decision thresholds.

use burn::{
    prelude::*,
    tensor::{backend::Backend, Tensor, TensorData},
};

use crate::error::{EvalError, EvalResult};

/// Ordered per-class decision thresholds in `[0, 1]`.
///
/// Supplied by an external threshold-selection step; this crate only applies
/// them. The vector length must equal the class count of whatever matrix it
/// is applied to.
#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds {
    values: Vec<f64>,
}

impl Thresholds {
    /// Creates a threshold vector, rejecting any value outside `[0, 1]`.
    pub fn new(values: Vec<f64>) -> EvalResult<Self> {
        for (index, &value) in values.iter().enumerate() {
            if !(0.0..=1.0).contains(&value) {
                return Err(EvalError::InvalidThreshold { index, value });
            }
        }
        Ok(Self { values })
    }

    /// The same threshold for every class.
    pub fn uniform(value: f64, num_classes: usize) -> EvalResult<Self> {
        Self::new(vec![value; num_classes])
    }

    /// Number of classes covered.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Binarizes a probability matrix with shape `[batch_size, num_classes]`
    /// against the per-class thresholds.
    ///
    /// Comparison is strict `>`: a score exactly equal to its threshold is
    /// classified negative.
    pub fn binarize<B: Backend>(
        &self,
        probabilities: Tensor<B, 2>,
    ) -> EvalResult<Tensor<B, 2, Int>> {
        let [batch_size, num_classes] = probabilities.dims();
        if num_classes != self.values.len() {
            return Err(EvalError::ThresholdCountMismatch {
                thresholds: self.values.len(),
                classes: num_classes,
            });
        }

        let device = probabilities.device();
        let row = Tensor::<B, 2>::from_data(
            TensorData::new(self.values.clone(), [1, num_classes]),
            &device,
        );

        Ok(probabilities.greater(row.repeat_dim(0, batch_size)).int())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray;

    #[test]
    fn rejects_out_of_range_values() {
        let result = Thresholds::new(vec![0.3, 1.5]);

        match result {
            Err(EvalError::InvalidThreshold { index, value }) => {
                assert_eq!(index, 1);
                assert!((value - 1.5).abs() < 1e-12);
            }
            _ => panic!("Expected InvalidThreshold error"),
        }
    }

    #[test]
    fn uniform_covers_every_class() {
        let thresholds = Thresholds::uniform(0.5, 4).unwrap();

        assert_eq!(thresholds.len(), 4);
        assert!(thresholds.values().iter().all(|&v| v == 0.5));
    }

    #[test]
    fn binarize_is_strictly_greater() {
        let device = Default::default();
        let thresholds = Thresholds::new(vec![0.5, 0.5]).unwrap();
        let probabilities =
            Tensor::<TestBackend, 2>::from_floats([[0.5, 0.6], [0.49, 0.51]], &device);

        let predictions = thresholds.binarize(probabilities).unwrap();

        let expected = Tensor::<TestBackend, 2, Int>::from_ints([[0, 1], [0, 1]], &device);
        predictions.into_data().assert_eq(&expected.into_data(), true);
    }

    #[test]
    fn binarize_applies_per_class_thresholds() {
        let device = Default::default();
        let thresholds = Thresholds::new(vec![0.2, 0.8]).unwrap();
        let probabilities = Tensor::<TestBackend, 2>::from_floats([[0.5, 0.5]], &device);

        let predictions = thresholds.binarize(probabilities).unwrap();

        let expected = Tensor::<TestBackend, 2, Int>::from_ints([[1, 0]], &device);
        predictions.into_data().assert_eq(&expected.into_data(), true);
    }

    #[test]
    fn binarize_rejects_length_mismatch() {
        let device = Default::default();
        let thresholds = Thresholds::new(vec![0.5, 0.5, 0.5]).unwrap();
        let probabilities = Tensor::<TestBackend, 2>::from_floats([[0.5, 0.6]], &device);

        let result = thresholds.binarize(probabilities);

        assert!(matches!(
            result,
            Err(EvalError::ThresholdCountMismatch {
                thresholds: 3,
                classes: 2,
            })
        ));
    }
}
