//! Learning-problem identities and their registry
//!
//! The registry is a static table from learning problem to the splitting
//! strategies and metrics that are semantically valid for it. Lookups are
//! O(1); requesting an unregistered combination fails while the batch is
//! being validated, before any training runs.

use crate::outcome::OutcomeKind;
use crate::split::SplitKind;
use serde::{Deserialize, Serialize};
use std::fmt;

const ALL_STRATEGIES: &[SplitKind] = &[
    SplitKind::InSample,
    SplitKind::PercentageSplit,
    SplitKind::CrossValidation,
    SplitKind::SuppliedTestSet,
];

// Rank aggregation fits a consensus over the whole dataset; resampling its
// instance rankings changes the problem, so only the non-resampling
// strategies are registered.
const CONSENSUS_STRATEGIES: &[SplitKind] = &[SplitKind::InSample, SplitKind::SuppliedTestSet];

const RANKING_METRICS: &[&str] = &["kendall_tau", "spearman"];

/// Category of prediction task under evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningProblem {
    /// Ordered class labels carried as scalars
    OrdinalClassification,
    /// Sparse label-set prediction
    MultilabelClassification,
    /// Rank the label set per instance
    LabelRanking,
    /// Rank a set of objects
    ObjectRanking,
    /// Rank instances against each other
    InstanceRanking,
    /// Consensus ranking from a set of input rankings
    RankAggregation,
    /// Scalar rating prediction
    CollaborativeFiltering,
}

impl LearningProblem {
    /// Outcome representation this problem predicts
    pub fn outcome_kind(&self) -> OutcomeKind {
        match self {
            Self::OrdinalClassification | Self::CollaborativeFiltering => OutcomeKind::Scalar,
            Self::MultilabelClassification => OutcomeKind::LabelSet,
            Self::LabelRanking
            | Self::ObjectRanking
            | Self::InstanceRanking
            | Self::RankAggregation => OutcomeKind::Ranking,
        }
    }

    /// Splitting strategies registered for this problem
    pub fn split_strategies(&self) -> &'static [SplitKind] {
        match self {
            Self::RankAggregation => CONSENSUS_STRATEGIES,
            _ => ALL_STRATEGIES,
        }
    }

    /// Metric names registered for this problem
    pub fn metrics(&self) -> &'static [&'static str] {
        match self {
            Self::OrdinalClassification => &["zero_one", "mae", "mse", "rmse"],
            Self::CollaborativeFiltering => &["mae", "mse", "rmse"],
            Self::MultilabelClassification => {
                &["hamming", "subset_accuracy", "jaccard", "micro_f1"]
            }
            Self::LabelRanking
            | Self::ObjectRanking
            | Self::InstanceRanking
            | Self::RankAggregation => RANKING_METRICS,
        }
    }

    /// Whether `strategy` is registered for this problem
    pub fn supports_strategy(&self, strategy: SplitKind) -> bool {
        self.split_strategies().contains(&strategy)
    }

    /// Whether the metric named `name` is registered for this problem
    pub fn supports_metric(&self, name: &str) -> bool {
        self.metrics().contains(&name)
    }
}

impl fmt::Display for LearningProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::OrdinalClassification => "ordinal_classification",
            Self::MultilabelClassification => "multilabel_classification",
            Self::LabelRanking => "label_ranking",
            Self::ObjectRanking => "object_ranking",
            Self::InstanceRanking => "instance_ranking",
            Self::RankAggregation => "rank_aggregation",
            Self::CollaborativeFiltering => "collaborative_filtering",
        };
        write!(f, "{name}")
    }
}
