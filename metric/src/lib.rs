//! # mleval-metric
//!
//! Multi-label classification metrics on Burn tensors.
//!
//! Predictions and targets are binary label matrices with shape
//! `[num_samples, num_classes]`, where every `(sample, class)` cell is one
//! independent binary decision. All ratios are micro-averaged: confusion
//! counts are pooled over every cell before any division, never computed
//! per class and then meaned.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use burn::prelude::*;
//! use mleval_metric::calculate_metrics;
//!
//! # fn example<B: burn::tensor::backend::Backend>(device: &B::Device) {
//! let truth = Tensor::<B, 2, Int>::from_ints([[1, 0], [0, 1]], device);
//! let preds = Tensor::<B, 2, Int>::from_ints([[1, 0], [0, 0]], device);
//!
//! let report = calculate_metrics(truth, preds).unwrap();
//! println!("micro F1: {}", report.f1_score);
//! # }
//! ```
//!
//! The `train` feature adds [`MicroF1Metric`], a streaming metric in the
//! `burn::train` style for live dashboards.

pub mod confusion;
pub mod error;
pub mod mcc;
#[cfg(feature = "train")]
pub mod micro_f1;
pub mod report;

pub use confusion::ConfusionTotals;
pub use error::{MetricError, MetricResult};
pub use mcc::matthews_corrcoef;
#[cfg(feature = "train")]
pub use micro_f1::{MicroF1Metric, MicroF1MetricConfig, MultiLabelInput};
pub use report::{calculate_metrics, MetricsReport};
