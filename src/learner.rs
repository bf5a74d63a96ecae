//! Learning-algorithm and model seams
//!
//! Algorithms are opaque to the driver: a [`Learner`] fits a fresh
//! [`Model`] on a training partition, the model predicts one outcome per
//! test instance in partition order, and either step may fail with an
//! algorithm-specific [`LearnerError`]. A failure aborts only the
//! combination being evaluated, never the whole batch.

use crate::dataset::Dataset;
use thiserror::Error;

/// Opaque failure raised by a learning algorithm
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LearnerError {
    message: String,
}

impl LearnerError {
    /// Failure with an algorithm-specific diagnostic
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result type for training and prediction calls
pub type LearnerResult<T> = std::result::Result<T, LearnerError>;

/// A supervised learning algorithm over datasets of type `D`
///
/// Stateless between invocations; the driver never mutates a learner
/// except through its own `fit` call.
pub trait Learner<D: Dataset>: Send + Sync {
    /// Algorithm identity, carried into evaluation results
    fn name(&self) -> &str;

    /// Fit a fresh model on the training partition
    fn fit(&self, train: &D) -> LearnerResult<Box<dyn Model<D>>>;
}

/// A fitted model, owned by the evaluation setting that produced it
pub trait Model<D: Dataset>: Send + Sync {
    /// One predicted outcome per instance, in partition order
    fn predict(&self, test: &D) -> LearnerResult<Vec<D::Outcome>>;
}
