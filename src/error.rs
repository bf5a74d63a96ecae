//! Configuration errors raised before any training starts

use crate::outcome::OutcomeKind;
use crate::problem::LearningProblem;
use crate::split::SplitKind;
use thiserror::Error;

/// Result type for configuration-time operations
pub type Result<T> = std::result::Result<T, EvalError>;

/// Errors in the requested evaluation configuration
///
/// Every variant is raised while validating a batch request, before any
/// model is trained. The batch request is rejected as a whole; the caller
/// can fix the request and retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Metric is not registered for the learning problem
    #[error("metric `{metric}` is not registered for {problem}")]
    MetricNotRegistered {
        metric: String,
        problem: LearningProblem,
    },

    /// Splitting strategy is not registered for the learning problem
    #[error("split strategy `{strategy}` is not registered for {problem}")]
    StrategyNotRegistered {
        strategy: SplitKind,
        problem: LearningProblem,
    },

    /// Dataset outcome representation does not match the learning problem
    #[error("{problem} expects {expected} outcomes, the dataset provides {actual}")]
    OutcomeMismatch {
        problem: LearningProblem,
        expected: OutcomeKind,
        actual: OutcomeKind,
    },

    /// Percentage-split ratio outside the open unit interval
    #[error("train ratio must lie strictly between 0 and 1, got {0}")]
    InvalidRatio(f64),

    /// Cross-validation fold count below the minimum
    #[error("cross-validation needs at least 2 folds, got {0}")]
    InvalidFoldCount(usize),

    /// Supplied-test-set evaluation given a single unsplit dataset
    #[error("supplied-test-set evaluation needs a train/test pair, dataset `{0}` is unsplit")]
    MissingTestSet(String),

    /// A train/test pair given to a strategy that partitions a single dataset
    #[error("dataset `{0}` is a train/test pair but the strategy partitions a single dataset")]
    UnexpectedTestSet(String),

    /// Metric name absent from the outcome's catalog
    #[error("unknown metric `{0}`")]
    UnknownMetric(String),
}
