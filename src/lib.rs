//! Evaluation harness for heterogeneous supervised learning problems
//!
//! Given a learning algorithm, a dataset, and a set of loss metrics, this
//! crate produces a reproducible numeric assessment of predictive quality
//! under one of four splitting protocols: in-sample, percentage split,
//! k-fold cross-validation, or a supplied train/test pair. One generic
//! driver covers structurally different prediction targets — scalar
//! ratings, rankings, sparse label sets — with one contract for combining
//! per-instance losses into partition- and fold-level results.
//!
//! ## Architecture
//!
//! - `outcome`: outcome representations and their metric catalogs
//! - `metric`: the loss-metric contract and the concrete metrics
//! - `split`: the four splitting strategies
//! - `dataset` / `learner`: the seams external collaborators implement
//! - `problem`: learning-problem identities and the validity registry
//! - `evaluate`: settings, results, the batch driver, the leaderboard
//! - `rng`: the process-wide seeded random source
//!
//! ## Example
//!
//! ```ignore
//! use evaluar::{EvalConfig, Evaluator, LearningProblem, Source, SplitSpec};
//!
//! let evaluator = Evaluator::new(
//!     EvalConfig::new(
//!         SplitSpec::CrossValidation { folds: 5 },
//!         vec!["mae".into(), "rmse".into()],
//!     )
//!     .with_seed(42),
//! );
//! let reports = evaluator.evaluate(
//!     LearningProblem::CollaborativeFiltering,
//!     &[&my_factorization_model],
//!     &[Source::Single(ratings)],
//! )?;
//! ```

pub mod dataset;
pub mod error;
pub mod evaluate;
pub mod learner;
pub mod metric;
pub mod outcome;
pub mod problem;
pub mod rng;
pub mod split;

pub use dataset::{Dataset, InMemoryDataset, Instance, Source};
pub use error::{EvalError, Result};
pub use evaluate::{EvalConfig, EvalReport, EvalResult, Evaluator, Leaderboard};
pub use learner::{Learner, LearnerError, LearnerResult, Model};
pub use metric::{Metric, MetricError, MetricResult};
pub use outcome::{LabelSet, Outcome, OutcomeKind, Ranking};
pub use problem::LearningProblem;
pub use split::{InSample, KFold, PercentageSplit, SplitKind, SplitSpec};
