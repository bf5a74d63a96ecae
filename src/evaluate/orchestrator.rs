//! Batch evaluation driver
//!
//! One generic driver covers every learning problem: validate the request
//! against the registry, fix all partitions, then train, predict, and score
//! each learner × dataset combination, combining cross-validation folds
//! size-weighted. Reports come back in the exact order the combinations
//! were requested (learner-major), folds ordered 0..k-1, whether or not the
//! work ran in parallel.

use super::config::EvalConfig;
use super::result::{EvalReport, EvalResult};
use super::setting::{EvalSetting, NamedMetric, Scored};
use crate::dataset::{Dataset, Source};
use crate::error::{EvalError, Result};
use crate::learner::{Learner, LearnerResult};
use crate::outcome::Outcome;
use crate::problem::LearningProblem;
use crate::rng;
use crate::split::SplitSpec;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use tracing::warn;

/// Generic evaluation driver
pub struct Evaluator {
    config: EvalConfig,
}

/// One learner × dataset combination with its fixed partitions
struct Work<D> {
    learner: usize,
    dataset: String,
    pairs: Vec<(D, D)>,
}

impl Evaluator {
    /// Driver with the given configuration
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    /// The configuration in use
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Evaluate every learner on every source
    ///
    /// The whole request is validated first: split parameters, strategy and
    /// metric registration for `problem`, outcome-kind compatibility, and
    /// source shapes. Any violation rejects the batch before a single model
    /// is trained. After validation, a failing learner costs only its own
    /// combination.
    pub fn evaluate<D: Dataset>(
        &self,
        problem: LearningProblem,
        learners: &[&dyn Learner<D>],
        sources: &[Source<D>],
    ) -> Result<Vec<EvalReport>> {
        let spec = self.config.split;
        spec.validate()?;

        if problem.outcome_kind() != <D::Outcome as Outcome>::KIND {
            return Err(EvalError::OutcomeMismatch {
                problem,
                expected: problem.outcome_kind(),
                actual: <D::Outcome as Outcome>::KIND,
            });
        }
        if !problem.supports_strategy(spec.kind()) {
            return Err(EvalError::StrategyNotRegistered {
                strategy: spec.kind(),
                problem,
            });
        }
        let metrics = resolve_metrics::<D::Outcome>(problem, &self.config.metrics)?;
        for source in sources {
            match (spec, source) {
                (SplitSpec::SuppliedTestSet, Source::Single(data)) => {
                    return Err(EvalError::MissingTestSet(data.name().to_string()));
                }
                (SplitSpec::SuppliedTestSet, Source::TrainTest { .. })
                | (_, Source::Single(_)) => {}
                (_, Source::TrainTest { train, .. }) => {
                    return Err(EvalError::UnexpectedTestSet(train.name().to_string()));
                }
            }
        }

        // All shuffles happen here, in request order, before any training;
        // every fold of a combination sees one fixed partitioning.
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => rng::fork(),
        };
        let mut work = Vec::with_capacity(learners.len() * sources.len());
        for index in 0..learners.len() {
            for source in sources {
                work.push(Work {
                    learner: index,
                    dataset: source.name().to_string(),
                    pairs: partitions(spec, source, &mut rng),
                });
            }
        }

        let reports: Vec<EvalReport> = if self.config.parallel {
            work.par_iter()
                .map(|item| self.run_combination(learners[item.learner], item, &metrics))
                .collect()
        } else {
            work.iter()
                .map(|item| self.run_combination(learners[item.learner], item, &metrics))
                .collect()
        };
        Ok(reports)
    }

    fn run_combination<D: Dataset>(
        &self,
        learner: &dyn Learner<D>,
        work: &Work<D>,
        metrics: &[NamedMetric<D::Outcome>],
    ) -> EvalReport {
        let dataset = work.dataset.as_str();
        let cv = matches!(self.config.split, SplitSpec::CrossValidation { .. });

        let run_fold = |(i, (train, test)): (usize, &(D, D))| {
            EvalSetting::new(learner, train, test, metrics).run(dataset, cv.then_some(i))
        };
        let outcomes: Vec<LearnerResult<Scored>> = if self.config.parallel {
            work.pairs.par_iter().enumerate().map(run_fold).collect()
        } else {
            work.pairs.iter().enumerate().map(run_fold).collect()
        };

        if !cv {
            return match outcomes.into_iter().next() {
                Some(Ok(scored)) => EvalReport {
                    learner: learner.name().to_string(),
                    dataset: dataset.to_string(),
                    folds: Vec::new(),
                    summary: Some(scored.result),
                    failure: None,
                },
                Some(Err(err)) => {
                    warn!(learner = learner.name(), dataset, %err, "combination failed");
                    failed_report(learner.name(), dataset, err.to_string())
                }
                None => failed_report(learner.name(), dataset, "no partitions produced".into()),
            };
        }

        let mut scored = Vec::with_capacity(outcomes.len());
        let mut failures = Vec::new();
        for (i, outcome) in outcomes.into_iter().enumerate() {
            match outcome {
                Ok(s) => scored.push(s),
                Err(err) => {
                    warn!(
                        learner = learner.name(),
                        dataset,
                        fold = i,
                        %err,
                        "fold evaluation failed"
                    );
                    failures.push(format!("fold {i}: {err}"));
                }
            }
        }

        let folds: Vec<EvalResult> = scored.iter().map(|s| s.result.clone()).collect();
        // No partial combination: the summary needs every fold's result.
        let summary = if failures.is_empty() {
            Some(combine_folds(learner.name(), dataset, &scored, metrics))
        } else {
            None
        };
        EvalReport {
            learner: learner.name().to_string(),
            dataset: dataset.to_string(),
            folds,
            summary,
            failure: if failures.is_empty() {
                None
            } else {
                Some(failures.join("; "))
            },
        }
    }
}

fn failed_report(learner: &str, dataset: &str, failure: String) -> EvalReport {
    EvalReport {
        learner: learner.to_string(),
        dataset: dataset.to_string(),
        folds: Vec::new(),
        summary: None,
        failure: Some(failure),
    }
}

fn resolve_metrics<O: Outcome>(
    problem: LearningProblem,
    names: &[String],
) -> Result<Vec<NamedMetric<O>>> {
    names
        .iter()
        .map(|name| {
            if !problem.supports_metric(name) {
                return Err(EvalError::MetricNotRegistered {
                    metric: name.clone(),
                    problem,
                });
            }
            O::metric(name)
                .map(|metric| (name.clone(), metric))
                .ok_or_else(|| EvalError::UnknownMetric(name.clone()))
        })
        .collect()
}

fn partitions<D: Dataset>(spec: SplitSpec, source: &Source<D>, rng: &mut StdRng) -> Vec<(D, D)> {
    match source {
        Source::TrainTest { train, test } => {
            let train_all: Vec<usize> = (0..train.len()).collect();
            let test_all: Vec<usize> = (0..test.len()).collect();
            vec![(train.subset(&train_all), test.subset(&test_all))]
        }
        Source::Single(data) => spec
            .plan(data.len(), rng)
            .into_iter()
            .map(|(train, test)| (data.subset(&train), data.subset(&test)))
            .collect(),
    }
}

fn combine_folds<O: Outcome>(
    learner: &str,
    dataset: &str,
    folds: &[Scored],
    metrics: &[NamedMetric<O>],
) -> EvalResult {
    let mut result = EvalResult::new(learner, dataset);
    for (name, metric) in metrics {
        let mut weights = Vec::with_capacity(folds.len());
        let mut raws = Vec::with_capacity(folds.len());
        for fold in folds {
            if let Some(&raw) = fold.raw.get(name) {
                weights.push(fold.test_len as f64);
                raws.push(raw);
            }
        }
        if raws.len() != folds.len() {
            result.add_note(format!(
                "{name}: missing in {} of {} folds; not combined",
                folds.len() - raws.len(),
                folds.len()
            ));
            continue;
        }
        match metric.combine(&weights, &raws) {
            Ok(value) if value.is_finite() => result.add_score(name, value),
            Ok(_) => result.add_note(format!("{name}: non-finite combined loss")),
            Err(err) => result.add_note(format!("{name}: {err}")),
        }
    }
    result.elapsed_ms = folds.iter().map(|f| f.result.elapsed_ms).sum();
    result
}
