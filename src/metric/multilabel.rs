//! Metrics over sparse label-set outcomes
//!
//! A pair is undefined when the two label alphabets differ in width (and,
//! per metric, in the degenerate cases noted below). Undefined pairs are
//! excluded from the mean.

use super::{check_lengths, Metric, MetricError, MetricResult};
use crate::outcome::LabelSet;

/// Hamming loss: fraction of label positions that disagree
#[derive(Debug, Clone, Copy, Default)]
pub struct HammingLoss;

impl Metric<LabelSet> for HammingLoss {
    fn name(&self) -> &'static str {
        "hamming"
    }

    fn higher_is_better(&self) -> bool {
        false
    }

    fn instance_loss(&self, expected: &LabelSet, predicted: &LabelSet) -> Option<f64> {
        let width = expected.width();
        if width == 0 || width != predicted.width() {
            return None;
        }
        let mismatches = (0..width)
            .filter(|&k| expected.contains(k) != predicted.contains(k))
            .count();
        Some(mismatches as f64 / width as f64)
    }
}

/// Subset accuracy: 1.0 on an exact label-set match, 0.0 otherwise
#[derive(Debug, Clone, Copy, Default)]
pub struct SubsetAccuracy;

impl Metric<LabelSet> for SubsetAccuracy {
    fn name(&self) -> &'static str {
        "subset_accuracy"
    }

    fn instance_loss(&self, expected: &LabelSet, predicted: &LabelSet) -> Option<f64> {
        let width = expected.width();
        if width == 0 || width != predicted.width() {
            return None;
        }
        let exact = (0..width).all(|k| expected.contains(k) == predicted.contains(k));
        Some(if exact { 1.0 } else { 0.0 })
    }
}

/// Jaccard index: |intersection| / |union| of the relevant labels
///
/// Undefined when both sets are empty (the union is empty).
///
/// # Example
///
/// ```
/// use evaluar::metric::multilabel::JaccardIndex;
/// use evaluar::metric::Metric;
/// use evaluar::outcome::LabelSet;
///
/// let jaccard = JaccardIndex;
/// let expected = LabelSet::new(vec![true, false, true, true, false]);
/// let disjoint = LabelSet::new(vec![false, true, false, false, true]);
/// assert_eq!(jaccard.instance_loss(&expected, &disjoint), Some(0.0));
///
/// let empty = LabelSet::new(vec![false; 5]);
/// assert_eq!(jaccard.instance_loss(&empty, &empty), None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JaccardIndex;

impl Metric<LabelSet> for JaccardIndex {
    fn name(&self) -> &'static str {
        "jaccard"
    }

    fn instance_loss(&self, expected: &LabelSet, predicted: &LabelSet) -> Option<f64> {
        let width = expected.width();
        if width != predicted.width() {
            return None;
        }
        let mut intersection = 0usize;
        let mut union = 0usize;
        for k in 0..width {
            match (expected.contains(k), predicted.contains(k)) {
                (true, true) => {
                    intersection += 1;
                    union += 1;
                }
                (true, false) | (false, true) => union += 1,
                (false, false) => {}
            }
        }
        if union == 0 {
            return None;
        }
        Some(intersection as f64 / union as f64)
    }
}

/// Micro-averaged F1 over the whole partition
///
/// Pools true/false positives and false negatives across every instance, so
/// it exists only at partition level; there is no per-instance loss.
#[derive(Debug, Clone, Copy, Default)]
pub struct MicroF1;

impl Metric<LabelSet> for MicroF1 {
    fn name(&self) -> &'static str {
        "micro_f1"
    }

    fn decomposable(&self) -> bool {
        false
    }

    fn instance_loss(&self, _expected: &LabelSet, _predicted: &LabelSet) -> Option<f64> {
        None
    }

    fn raw_loss(&self, expected: &[LabelSet], predicted: &[LabelSet]) -> MetricResult<f64> {
        check_lengths(expected.len(), predicted.len())?;
        let mut tp = 0u64;
        let mut fp = 0u64;
        let mut missed = 0u64;
        let mut comparable = false;
        for (e, p) in expected.iter().zip(predicted) {
            if e.width() != p.width() {
                continue;
            }
            comparable = true;
            for k in 0..e.width() {
                match (e.contains(k), p.contains(k)) {
                    (true, true) => tp += 1,
                    (false, true) => fp += 1,
                    (true, false) => missed += 1,
                    (false, false) => {}
                }
            }
        }
        let denom = 2 * tp + fp + missed;
        if !comparable || denom == 0 {
            return Err(MetricError::Undefined);
        }
        Ok(2.0 * tp as f64 / denom as f64)
    }
}
