//! Evaluation driver: settings, results, orchestration, comparison
//!
//! ## Architecture
//!
//! - `config`: what to run — split strategy, metrics, seed, parallelism
//! - `setting`: one train/predict/score pass over a partition pair
//! - `orchestrator`: the batch driver over learners × datasets
//! - `result`: per-pass and per-combination result records
//! - `leaderboard`: ranked comparison of results
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
//!
//! let reports = evaluator.evaluate(
//!     LearningProblem::CollaborativeFiltering,
//!     &[&matrix_factorization],
//!     &[Source::Single(ratings)],
//! )?;
//! println!("combined rmse: {:?}", reports[0].summary);
//! ```

mod config;
mod leaderboard;
mod orchestrator;
mod result;
mod setting;

#[cfg(test)]
mod tests;

pub use config::EvalConfig;
pub use leaderboard::Leaderboard;
pub use orchestrator::Evaluator;
pub use result::{EvalReport, EvalResult};
