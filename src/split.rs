//! Dataset splitting strategies
//!
//! Four interchangeable protocols produce (train, test) index pairs from a
//! source dataset: in-sample, percentage split, k-fold cross-validation,
//! and a caller-supplied train/test pair. The shuffling strategies draw
//! from one seeded generator fixed before any training starts, so repeated
//! runs with the same seed reproduce identical partitions.

use crate::error::{EvalError, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A (train, test) pair of instance indices into one source dataset
pub type IndexSplit = (Vec<usize>, Vec<usize>);

/// Strategy identity, used by the learning-problem registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitKind {
    /// Train and test on the whole source dataset
    InSample,
    /// One shuffled cut at a configured ratio
    PercentageSplit,
    /// K folds, each tested once
    CrossValidation,
    /// Caller provides the train/test pair; nothing is shuffled
    SuppliedTestSet,
}

impl fmt::Display for SplitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InSample => write!(f, "in_sample"),
            Self::PercentageSplit => write!(f, "percentage_split"),
            Self::CrossValidation => write!(f, "cross_validation"),
            Self::SuppliedTestSet => write!(f, "supplied_test_set"),
        }
    }
}

/// Strategy selection with its parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitSpec {
    /// Evaluate on the training data itself
    InSample,
    /// Shuffle once and cut at `floor(train_ratio * n)`
    PercentageSplit { train_ratio: f64 },
    /// K-fold cross-validation
    CrossValidation { folds: usize },
    /// Use an already-split train/test source pair
    SuppliedTestSet,
}

impl SplitSpec {
    /// Strategy identity without parameters
    pub fn kind(&self) -> SplitKind {
        match self {
            Self::InSample => SplitKind::InSample,
            Self::PercentageSplit { .. } => SplitKind::PercentageSplit,
            Self::CrossValidation { .. } => SplitKind::CrossValidation,
            Self::SuppliedTestSet => SplitKind::SuppliedTestSet,
        }
    }

    /// Reject malformed parameters before any training starts
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::PercentageSplit { train_ratio } => {
                if !(train_ratio > 0.0 && train_ratio < 1.0) {
                    return Err(EvalError::InvalidRatio(train_ratio));
                }
            }
            Self::CrossValidation { folds } => {
                if folds < 2 {
                    return Err(EvalError::InvalidFoldCount(folds));
                }
            }
            Self::InSample | Self::SuppliedTestSet => {}
        }
        Ok(())
    }

    /// Index pairs for the single-source strategies
    ///
    /// Callers must [`validate`](SplitSpec::validate) first. The supplied
    /// test set carries no index plan; its pair comes from the source shape.
    pub(crate) fn plan(&self, n: usize, rng: &mut StdRng) -> Vec<IndexSplit> {
        match *self {
            Self::InSample => vec![InSample.split(n)],
            Self::PercentageSplit { train_ratio } => {
                vec![PercentageSplit { train_ratio }.split(n, rng)]
            }
            Self::CrossValidation { folds } => KFold { folds }.split(n, rng),
            Self::SuppliedTestSet => Vec::new(),
        }
    }
}

/// In-sample splitter: train = test = the whole dataset
#[derive(Debug, Clone, Copy, Default)]
pub struct InSample;

impl InSample {
    /// The single (train, test) pair; no randomness involved
    pub fn split(&self, n: usize) -> IndexSplit {
        let all: Vec<usize> = (0..n).collect();
        (all.clone(), all)
    }
}

/// Percentage splitter: one shuffle, one cut
#[derive(Debug, Clone, Copy)]
pub struct PercentageSplit {
    pub(crate) train_ratio: f64,
}

impl PercentageSplit {
    /// Splitter with `train_ratio` in the open unit interval
    pub fn new(train_ratio: f64) -> Result<Self> {
        SplitSpec::PercentageSplit { train_ratio }.validate()?;
        Ok(Self { train_ratio })
    }

    /// Shuffle the indices once and cut at `floor(train_ratio * n)`
    pub fn split(&self, n: usize, rng: &mut StdRng) -> IndexSplit {
        let mut indices: Vec<usize> = (0..n).collect();
        indices.shuffle(rng);
        let cut = (self.train_ratio * n as f64).floor() as usize;
        let test = indices.split_off(cut);
        (indices, test)
    }
}

/// K-fold cross-validation splitter
#[derive(Debug, Clone, Copy)]
pub struct KFold {
    pub(crate) folds: usize,
}

impl KFold {
    /// Splitter with at least 2 folds
    pub fn new(folds: usize) -> Result<Self> {
        SplitSpec::CrossValidation { folds }.validate()?;
        Ok(Self { folds })
    }

    /// One (train, test) pair per fold, fold order stable 0..k-1
    ///
    /// Shuffles once, then cuts k contiguous blocks sized as evenly as
    /// possible; the first `n % k` blocks take one extra instance. Fold i
    /// tests on block i and trains on the union of the other blocks.
    pub fn split(&self, n: usize, rng: &mut StdRng) -> Vec<IndexSplit> {
        let mut indices: Vec<usize> = (0..n).collect();
        indices.shuffle(rng);

        let fold_size = n / self.folds;
        let remainder = n % self.folds;

        let mut pairs = Vec::with_capacity(self.folds);
        let mut start = 0;
        for i in 0..self.folds {
            let extra = usize::from(i < remainder);
            let end = start + fold_size + extra;

            let test: Vec<usize> = indices[start..end].to_vec();
            let train: Vec<usize> = indices[..start]
                .iter()
                .chain(indices[end..].iter())
                .copied()
                .collect();

            pairs.push((train, test));
            start = end;
        }
        pairs
    }
}
