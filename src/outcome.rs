//! Outcome representations and their metric catalogs
//!
//! Each learning problem predicts one of three outcome representations: a
//! scalar rating (`f64`), a [`Ranking`] over items, or a sparse [`LabelSet`].
//! The [`Outcome`] trait ties a representation to the metrics that can score
//! it, keyed by stable metric names.

use crate::metric::multilabel::{HammingLoss, JaccardIndex, MicroF1, SubsetAccuracy};
use crate::metric::ranking::{KendallTau, SpearmanRho};
use crate::metric::scalar::{MeanAbsoluteError, MeanSquaredError, RootMeanSquaredError, ZeroOneError};
use crate::metric::Metric;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The outcome representation a dataset carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// Scalar rating or class label
    Scalar,
    /// Total order over items
    Ranking,
    /// Sparse set over a fixed label alphabet
    LabelSet,
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => write!(f, "scalar"),
            Self::Ranking => write!(f, "ranking"),
            Self::LabelSet => write!(f, "label-set"),
        }
    }
}

/// An outcome representation with a catalog of applicable metrics
pub trait Outcome: Clone + Send + Sync + 'static {
    /// Representation tag, checked against the learning problem's
    const KIND: OutcomeKind;

    /// Resolve a metric from this representation's catalog by stable name
    fn metric(name: &str) -> Option<Box<dyn Metric<Self>>>;

    /// Stable names of every metric in the catalog
    fn metric_names() -> &'static [&'static str];
}

impl Outcome for f64 {
    const KIND: OutcomeKind = OutcomeKind::Scalar;

    fn metric(name: &str) -> Option<Box<dyn Metric<Self>>> {
        match name {
            "mae" => Some(Box::new(MeanAbsoluteError)),
            "mse" => Some(Box::new(MeanSquaredError)),
            "rmse" => Some(Box::new(RootMeanSquaredError)),
            "zero_one" => Some(Box::new(ZeroOneError)),
            _ => None,
        }
    }

    fn metric_names() -> &'static [&'static str] {
        &["mae", "mse", "rmse", "zero_one"]
    }
}

/// A total order over `m` items
///
/// Stored as item indices from most to least preferred; a valid ranking is a
/// permutation of `0..m`. Malformed rankings are treated as degenerate by
/// the ranking metrics (the instance is excluded, not the whole evaluation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking {
    order: Vec<usize>,
}

impl Ranking {
    /// Ranking from item indices, most preferred first
    pub fn new(order: Vec<usize>) -> Self {
        Self { order }
    }

    /// Number of ranked items
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when no items are ranked
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Item indices in preference order
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Position of each item: `ranks()[item]` is the item's rank
    ///
    /// Returns `None` when the stored order is not a permutation of `0..m`.
    pub fn ranks(&self) -> Option<Vec<usize>> {
        let m = self.order.len();
        let mut ranks = vec![usize::MAX; m];
        for (position, &item) in self.order.iter().enumerate() {
            if item >= m || ranks[item] != usize::MAX {
                return None;
            }
            ranks[item] = position;
        }
        Some(ranks)
    }
}

impl Outcome for Ranking {
    const KIND: OutcomeKind = OutcomeKind::Ranking;

    fn metric(name: &str) -> Option<Box<dyn Metric<Self>>> {
        match name {
            "kendall_tau" => Some(Box::new(KendallTau)),
            "spearman" => Some(Box::new(SpearmanRho)),
            _ => None,
        }
    }

    fn metric_names() -> &'static [&'static str] {
        &["kendall_tau", "spearman"]
    }
}

/// A sparse set of relevant labels over a fixed label alphabet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSet {
    relevant: Vec<bool>,
}

impl LabelSet {
    /// Label set from per-label relevance flags
    pub fn new(relevant: Vec<bool>) -> Self {
        Self { relevant }
    }

    /// Label set of `width` labels with the given indices relevant
    pub fn from_indices(width: usize, on: &[usize]) -> Self {
        let mut relevant = vec![false; width];
        for &label in on {
            if label < width {
                relevant[label] = true;
            }
        }
        Self { relevant }
    }

    /// Size of the label alphabet
    pub fn width(&self) -> usize {
        self.relevant.len()
    }

    /// Whether `label` is relevant
    pub fn contains(&self, label: usize) -> bool {
        self.relevant.get(label).copied().unwrap_or(false)
    }

    /// Number of relevant labels
    pub fn count(&self) -> usize {
        self.relevant.iter().filter(|&&r| r).count()
    }
}

impl Outcome for LabelSet {
    const KIND: OutcomeKind = OutcomeKind::LabelSet;

    fn metric(name: &str) -> Option<Box<dyn Metric<Self>>> {
        match name {
            "hamming" => Some(Box::new(HammingLoss)),
            "subset_accuracy" => Some(Box::new(SubsetAccuracy)),
            "jaccard" => Some(Box::new(JaccardIndex)),
            "micro_f1" => Some(Box::new(MicroF1)),
            _ => None,
        }
    }

    fn metric_names() -> &'static [&'static str] {
        &["hamming", "subset_accuracy", "jaccard", "micro_f1"]
    }
}
