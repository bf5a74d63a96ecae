//! One train/predict/score pass

use super::result::EvalResult;
use crate::dataset::Dataset;
use crate::learner::{Learner, LearnerResult};
use crate::metric::Metric;
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::debug;

/// A metric resolved from the catalog, keyed by its requested name
pub(crate) type NamedMetric<O> = (String, Box<dyn Metric<O>>);

/// A learner bound to one train/test partition pair and the metrics to
/// compute against it
///
/// Created per combination and split, consumed by [`run`](EvalSetting::run).
/// The fitted model lives only inside the run and is never reused.
pub(crate) struct EvalSetting<'a, D: Dataset> {
    learner: &'a dyn Learner<D>,
    train: &'a D,
    test: &'a D,
    metrics: &'a [NamedMetric<D::Outcome>],
}

/// Result of one pass, with raw losses kept for fold combination
pub(crate) struct Scored {
    pub result: EvalResult,
    /// Combinable-form loss per computed metric
    pub raw: BTreeMap<String, f64>,
    /// Test partition size, the fold's combination weight
    pub test_len: usize,
}

impl<'a, D: Dataset> EvalSetting<'a, D> {
    pub(crate) fn new(
        learner: &'a dyn Learner<D>,
        train: &'a D,
        test: &'a D,
        metrics: &'a [NamedMetric<D::Outcome>],
    ) -> Self {
        Self {
            learner,
            train,
            test,
            metrics,
        }
    }

    /// Fit, predict, and score
    ///
    /// Training and prediction failures propagate to the caller, which
    /// reports the combination (or fold) as failed. A metric that cannot be
    /// computed loses only its own entry and leaves a diagnostic note.
    pub(crate) fn run(self, dataset: &str, fold: Option<usize>) -> LearnerResult<Scored> {
        let started = Instant::now();

        let model = self.learner.fit(self.train)?;
        let predicted = model.predict(self.test)?;

        let expected: Vec<D::Outcome> = (0..self.test.len())
            .map(|i| self.test.expected(i).clone())
            .collect();

        let mut result = EvalResult::new(self.learner.name(), dataset);
        result.fold = fold;
        let mut raw = BTreeMap::new();

        for (name, metric) in self.metrics {
            match metric.raw_loss(&expected, &predicted) {
                Ok(value) => {
                    let finished = metric.finish(value);
                    if finished.is_finite() {
                        raw.insert(name.clone(), value);
                        result.add_score(name, finished);
                    } else {
                        debug!(metric = name.as_str(), "non-finite loss excluded");
                        result.add_note(format!("{name}: non-finite loss"));
                    }
                }
                Err(err) => {
                    debug!(metric = name.as_str(), %err, "metric not computed");
                    result.add_note(format!("{name}: {err}"));
                }
            }
        }

        result.elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        Ok(Scored {
            result,
            raw,
            test_len: self.test.len(),
        })
    }
}
