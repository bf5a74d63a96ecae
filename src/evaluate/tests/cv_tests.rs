//! Tests for cross-validation orchestration and fold combination

use super::support::{ratings, Constant, Oracle, PickyOnTestLen};
use crate::dataset::Source;
use crate::evaluate::{EvalConfig, Evaluator};
use crate::problem::LearningProblem;
use crate::split::SplitSpec;
use approx::assert_relative_eq;

fn cv(folds: usize, metrics: &[&str], seed: u64) -> Evaluator {
    Evaluator::new(
        EvalConfig::new(
            SplitSpec::CrossValidation { folds },
            metrics.iter().map(|m| m.to_string()).collect(),
        )
        .with_seed(seed),
    )
}

#[test]
fn test_five_fold_shape() {
    let evaluator = cv(5, &["zero_one", "mae"], 42);
    let reports = evaluator
        .evaluate(
            LearningProblem::OrdinalClassification,
            &[&Oracle],
            &[Source::Single(ratings("ordinal", 50))],
        )
        .unwrap();

    assert_eq!(reports.len(), 1);
    let report = &reports[0];

    // 5 per-fold results plus one combined, folds ordered 0..4
    assert_eq!(report.folds.len(), 5);
    for (i, fold) in report.folds.iter().enumerate() {
        assert_eq!(fold.fold, Some(i));
        assert!(fold.score("zero_one").is_some());
        assert!(fold.score("mae").is_some());
    }
    let summary = report.summary.as_ref().unwrap();
    assert_eq!(summary.fold, None);
    assert_relative_eq!(summary.score("zero_one").unwrap(), 0.0);
    assert_relative_eq!(summary.score("mae").unwrap(), 0.0);
}

#[test]
fn test_same_seed_is_deterministic() {
    let run = || {
        cv(4, &["mae", "rmse"], 7)
            .evaluate(
                LearningProblem::CollaborativeFiltering,
                &[&Constant {
                    name: "constant",
                    value: 1.0,
                }],
                &[Source::Single(ratings("ml", 23))],
            )
            .unwrap()
    };
    let first = run();
    let second = run();

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.summary.as_ref().unwrap().scores, b.summary.as_ref().unwrap().scores);
        assert_eq!(a.folds.len(), b.folds.len());
        for (fa, fb) in a.folds.iter().zip(&b.folds) {
            assert_eq!(fa.scores, fb.scores);
        }
    }
}

#[test]
fn test_combination_weights_by_fold_size() {
    // n = 10, k = 3: fold test sizes 4, 3, 3 in fold order
    let reports = cv(3, &["mae", "rmse"], 11)
        .evaluate(
            LearningProblem::CollaborativeFiltering,
            &[&Constant {
                name: "constant",
                value: 0.0,
            }],
            &[Source::Single(ratings("ml", 10))],
        )
        .unwrap();

    let report = &reports[0];
    let summary = report.summary.as_ref().unwrap();
    let weights = [4.0, 3.0, 3.0];
    let total: f64 = weights.iter().sum();

    // mae is linear: the combined loss is the size-weighted fold mean
    let fold_mae: Vec<f64> = report.folds.iter().map(|f| f.score("mae").unwrap()).collect();
    let expected_mae: f64 = weights
        .iter()
        .zip(&fold_mae)
        .map(|(w, l)| w * l)
        .sum::<f64>()
        / total;
    assert_relative_eq!(summary.score("mae").unwrap(), expected_mae, epsilon = 1e-12);

    // rmse folds report sqrt(mse); the combination weights the fold MSEs
    // and takes one square root at the end
    let fold_mse: Vec<f64> = report
        .folds
        .iter()
        .map(|f| f.score("rmse").unwrap().powi(2))
        .collect();
    let expected_rmse = (weights
        .iter()
        .zip(&fold_mse)
        .map(|(w, l)| w * l)
        .sum::<f64>()
        / total)
        .sqrt();
    assert_relative_eq!(summary.score("rmse").unwrap(), expected_rmse, epsilon = 1e-12);
}

#[test]
fn test_fold_failure_withholds_summary_keeps_folds() {
    // n = 10, k = 3 gives test sizes 4, 3, 3; prediction fails only on the
    // 4-instance fold
    let reports = cv(3, &["mae"], 42)
        .evaluate(
            LearningProblem::CollaborativeFiltering,
            &[&PickyOnTestLen(4)],
            &[Source::Single(ratings("ml", 10))],
        )
        .unwrap();

    let report = &reports[0];
    assert!(!report.succeeded());
    assert_eq!(report.folds.len(), 2);
    let failure = report.failure.as_deref().unwrap();
    assert!(failure.contains("fold 0"));
    assert!(failure.contains("synthetic prediction failure"));
}

#[test]
fn test_parallel_matches_sequential() {
    let sequential = cv(5, &["mae", "rmse"], 3)
        .evaluate(
            LearningProblem::CollaborativeFiltering,
            &[&Constant {
                name: "constant",
                value: 2.5,
            }],
            &[Source::Single(ratings("ml", 31))],
        )
        .unwrap();

    let parallel = Evaluator::new(
        EvalConfig::new(
            SplitSpec::CrossValidation { folds: 5 },
            vec!["mae".into(), "rmse".into()],
        )
        .with_seed(3)
        .with_parallel(),
    )
    .evaluate(
        LearningProblem::CollaborativeFiltering,
        &[&Constant {
            name: "constant",
            value: 2.5,
        }],
        &[Source::Single(ratings("ml", 31))],
    )
    .unwrap();

    assert_eq!(sequential.len(), parallel.len());
    for (s, p) in sequential.iter().zip(&parallel) {
        assert_eq!(s.learner, p.learner);
        assert_eq!(
            s.summary.as_ref().unwrap().scores,
            p.summary.as_ref().unwrap().scores
        );
        for (fs, fp) in s.folds.iter().zip(&p.folds) {
            assert_eq!(fs.fold, fp.fold);
            assert_eq!(fs.scores, fp.scores);
        }
    }
}

#[test]
fn test_equal_folds_reduce_to_unweighted_mean() {
    // n = 20, k = 4: every fold tests 5 instances
    let reports = cv(4, &["mae"], 19)
        .evaluate(
            LearningProblem::CollaborativeFiltering,
            &[&Constant {
                name: "constant",
                value: 0.0,
            }],
            &[Source::Single(ratings("ml", 20))],
        )
        .unwrap();

    let report = &reports[0];
    let fold_mae: Vec<f64> = report.folds.iter().map(|f| f.score("mae").unwrap()).collect();
    let mean: f64 = fold_mae.iter().sum::<f64>() / fold_mae.len() as f64;
    assert_relative_eq!(
        report.summary.as_ref().unwrap().score("mae").unwrap(),
        mean,
        epsilon = 1e-12
    );
}
