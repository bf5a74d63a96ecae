//! Evaluation result structures

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Scores for one learner/dataset pairing, or one fold of it
///
/// Immutable once emitted by the driver. Every recorded loss is finite;
/// metrics that could not be computed are absent from `scores` and
/// explained in `notes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalResult {
    /// Learning-algorithm identity
    pub learner: String,
    /// Dataset identity
    pub dataset: String,
    /// Fold index, set only for cross-validation fold results
    pub fold: Option<usize>,
    /// Metric name to loss value
    pub scores: BTreeMap<String, f64>,
    /// Diagnostics for metrics that were not computed
    pub notes: Vec<String>,
    /// Wall time spent fitting, predicting, and scoring, in milliseconds
    pub elapsed_ms: f64,
}

impl EvalResult {
    /// Empty result for the given identities
    pub fn new(learner: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            learner: learner.into(),
            dataset: dataset.into(),
            fold: None,
            scores: BTreeMap::new(),
            notes: Vec::new(),
            elapsed_ms: 0.0,
        }
    }

    /// Loss recorded for `metric`, if it was computed
    pub fn score(&self, metric: &str) -> Option<f64> {
        self.scores.get(metric).copied()
    }

    pub(crate) fn add_score(&mut self, metric: &str, value: f64) {
        self.scores.insert(metric.to_string(), value);
    }

    pub(crate) fn add_note(&mut self, note: String) {
        self.notes.push(note);
    }
}

impl fmt::Display for EvalResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fold {
            Some(fold) => writeln!(
                f,
                "{} on {} (fold {fold})",
                self.learner, self.dataset
            )?,
            None => writeln!(f, "{} on {}", self.learner, self.dataset)?,
        }
        for (metric, value) in &self.scores {
            writeln!(f, "  {metric}: {value:.4}")?;
        }
        for note in &self.notes {
            writeln!(f, "  note: {note}")?;
        }
        Ok(())
    }
}

/// Everything produced for one learner/dataset combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalReport {
    /// Learning-algorithm identity
    pub learner: String,
    /// Dataset identity
    pub dataset: String,
    /// Per-fold results in fold order (cross-validation only)
    pub folds: Vec<EvalResult>,
    /// Combined result; withheld when training or prediction failed
    pub summary: Option<EvalResult>,
    /// Diagnostic for a failed combination
    pub failure: Option<String>,
}

impl EvalReport {
    /// Whether the combination produced a combined result
    pub fn succeeded(&self) -> bool {
        self.summary.is_some()
    }
}
