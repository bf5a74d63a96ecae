//! Loss metrics over expected/predicted outcome pairs
//!
//! A metric either decomposes into per-instance losses that are averaged
//! (`mae`, `hamming`, ...) or is defined only over a complete partition
//! (`micro_f1`, and `rmse` whose square root must be applied exactly once).
//! Both shapes share one contract:
//!
//! - [`Metric::instance_loss`] — loss for one pair, `None` when the pair is
//!   degenerate and the loss is undefined for it
//! - [`Metric::raw_loss`] — partition-level loss in its combinable form
//!   (mean squared error for `rmse`)
//! - [`Metric::finish`] — the non-linear final transform, applied once after
//!   any weighted combination
//! - [`Metric::combine`] — size-weighted mean of fold-level raw losses

pub mod multilabel;
pub mod ranking;
pub mod scalar;


use thiserror::Error;

/// Result type for loss aggregation
pub type MetricResult<T> = std::result::Result<T, MetricError>;

/// Failure to aggregate losses over a partition or across folds
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricError {
    /// Expected and predicted sequences differ in length
    ///
    /// Never silently truncated; the metric fails for this partition.
    #[error("expected {expected} outcomes, got {predicted} predictions")]
    LengthMismatch { expected: usize, predicted: usize },

    /// The loss is undefined for every instance in the partition
    #[error("loss is undefined for every instance in the partition")]
    Undefined,

    /// Weight and loss sequences differ in length
    #[error("got {weights} weights for {losses} fold losses")]
    WeightMismatch { weights: usize, losses: usize },

    /// Weights are negative, non-finite, or sum to zero
    #[error("weights must be non-negative with a positive sum")]
    InvalidWeights,
}

pub(crate) fn check_lengths(expected: usize, predicted: usize) -> MetricResult<()> {
    if expected != predicted {
        return Err(MetricError::LengthMismatch {
            expected,
            predicted,
        });
    }
    Ok(())
}

/// A loss metric over outcome type `O`
pub trait Metric<O>: Send + Sync {
    /// Stable metric name
    fn name(&self) -> &'static str;

    /// Whether larger values indicate better predictions
    fn higher_is_better(&self) -> bool {
        true
    }

    /// Whether the partition loss is the plain mean of per-instance losses
    fn decomposable(&self) -> bool {
        true
    }

    /// Loss for a single expected/predicted pair
    ///
    /// `None` marks a pair for which the loss is undefined (degenerate
    /// inputs); the instance is excluded from the mean, not scored as zero.
    /// Metrics that only exist at partition level return `None` for every
    /// pair and override [`raw_loss`](Metric::raw_loss).
    fn instance_loss(&self, expected: &O, predicted: &O) -> Option<f64>;

    /// Partition-level loss in its combinable form, before [`finish`](Metric::finish)
    ///
    /// Default: arithmetic mean of the defined per-instance losses. Errors
    /// when the sequences differ in length or every instance is undefined.
    fn raw_loss(&self, expected: &[O], predicted: &[O]) -> MetricResult<f64> {
        check_lengths(expected.len(), predicted.len())?;
        let mut sum = 0.0;
        let mut defined = 0usize;
        for (e, p) in expected.iter().zip(predicted) {
            if let Some(loss) = self.instance_loss(e, p) {
                sum += loss;
                defined += 1;
            }
        }
        if defined == 0 {
            return Err(MetricError::Undefined);
        }
        Ok(sum / defined as f64)
    }

    /// Final transform, applied exactly once after any weighted combination
    fn finish(&self, raw: f64) -> f64 {
        raw
    }

    /// Loss over one partition
    fn aggregate(&self, expected: &[O], predicted: &[O]) -> MetricResult<f64> {
        Ok(self.finish(self.raw_loss(expected, predicted)?))
    }

    /// Weighted mean of fold-level raw losses, then one [`finish`](Metric::finish)
    ///
    /// `sum(w_i * raw_i) / sum(w_i)`. With equal weights this reduces to the
    /// unweighted mean. The final transform is applied here and only here,
    /// never per fold.
    fn combine(&self, weights: &[f64], raw_losses: &[f64]) -> MetricResult<f64> {
        if weights.len() != raw_losses.len() {
            return Err(MetricError::WeightMismatch {
                weights: weights.len(),
                losses: raw_losses.len(),
            });
        }
        if weights.is_empty() || weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(MetricError::InvalidWeights);
        }
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return Err(MetricError::InvalidWeights);
        }
        let dot: f64 = weights.iter().zip(raw_losses).map(|(w, l)| w * l).sum();
        Ok(self.finish(dot / total))
    }
}
