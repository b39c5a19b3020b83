//! Batch types for multi-label evaluation datasets.
//!
//! The evaluator consumes [`MultiLabelBatch`]es; [`MultiLabelBatcher`] builds
//! them from individual items following Burn's batcher pattern, stacking
//! feature and label tensors along a new batch dimension.

use burn::data::dataloader::batcher::Batcher;
use burn::tensor::{backend::Backend, Int, Tensor};

/// A single preprocessed dataset sample.
#[derive(Debug, Clone)]
pub struct MultiLabelItem<B: Backend> {
    /// Caller-side sample identifier, carried through untouched.
    pub id: usize,
    /// Feature vector with shape `[num_features]`.
    pub features: Tensor<B, 1>,
    /// Binary labels with shape `[num_classes]`, entries in `{0, 1}`.
    pub labels: Tensor<B, 1, Int>,
}

/// A batch of samples ready for scoring.
#[derive(Debug, Clone)]
pub struct MultiLabelBatch<B: Backend> {
    /// Sample identifiers in batch order. Evaluation ignores these.
    pub ids: Vec<usize>,
    /// Features with shape `[batch_size, num_features]`.
    pub features: Tensor<B, 2>,
    /// Binary labels with shape `[batch_size, num_classes]`.
    pub labels: Tensor<B, 2, Int>,
}

/// Batcher converting vectors of [`MultiLabelItem`] into [`MultiLabelBatch`].
#[derive(Clone, Default)]
pub struct MultiLabelBatcher<B: Backend> {
    _phantom: std::marker::PhantomData<B>,
}

impl<B: Backend> MultiLabelBatcher<B> {
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<B: Backend> Batcher<B, MultiLabelItem<B>, MultiLabelBatch<B>> for MultiLabelBatcher<B> {
    fn batch(&self, items: Vec<MultiLabelItem<B>>, _device: &B::Device) -> MultiLabelBatch<B> {
        let batch_size = items.len();

        let mut ids = Vec::with_capacity(batch_size);
        let mut features = Vec::with_capacity(batch_size);
        let mut labels = Vec::with_capacity(batch_size);

        for item in items {
            ids.push(item.id);
            features.push(item.features);
            labels.push(item.labels);
        }

        // Stack along a new leading batch dimension.
        let features: Tensor<B, 2> = Tensor::stack(features, 0);
        let labels: Tensor<B, 2, Int> = Tensor::stack(labels, 0);

        MultiLabelBatch {
            ids,
            features,
            labels,
        }
    }
}
