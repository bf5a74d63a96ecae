//! Metrics over scalar outcomes: MAE, MSE, RMSE, zero-one error
//!
//! Scalar outcomes cover collaborative-filtering ratings and ordinal class
//! labels. Pairs with non-finite values are treated as undefined and
//! excluded from the mean.

use super::Metric;

/// Mean Absolute Error
///
/// MAE = mean(|expected - predicted|)
///
/// # Example
///
/// ```
/// use evaluar::metric::scalar::MeanAbsoluteError;
/// use evaluar::metric::Metric;
///
/// let mae = MeanAbsoluteError;
/// let loss = mae.aggregate(&[1.0, 2.0, 3.0], &[1.5, 2.5, 3.5]).unwrap();
/// assert!((loss - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanAbsoluteError;

impl Metric<f64> for MeanAbsoluteError {
    fn name(&self) -> &'static str {
        "mae"
    }

    fn higher_is_better(&self) -> bool {
        false
    }

    fn instance_loss(&self, expected: &f64, predicted: &f64) -> Option<f64> {
        if expected.is_finite() && predicted.is_finite() {
            Some((expected - predicted).abs())
        } else {
            None
        }
    }
}

/// Mean Squared Error
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanSquaredError;

impl Metric<f64> for MeanSquaredError {
    fn name(&self) -> &'static str {
        "mse"
    }

    fn higher_is_better(&self) -> bool {
        false
    }

    fn instance_loss(&self, expected: &f64, predicted: &f64) -> Option<f64> {
        if expected.is_finite() && predicted.is_finite() {
            Some((expected - predicted).powi(2))
        } else {
            None
        }
    }
}

/// Root Mean Squared Error
///
/// The partition-level raw loss is the mean squared error; the square root
/// is the final transform. Combining folds therefore weights the fold MSEs
/// and takes one square root at the end, never per fold.
///
/// # Example
///
/// ```
/// use evaluar::metric::scalar::RootMeanSquaredError;
/// use evaluar::metric::Metric;
///
/// let rmse = RootMeanSquaredError;
/// // fold MSEs 1.0 and 4.0 over 2 and 3 test instances
/// let combined = rmse.combine(&[2.0, 3.0], &[1.0, 4.0]).unwrap();
/// assert!((combined - 2.8f64.sqrt()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RootMeanSquaredError;

impl Metric<f64> for RootMeanSquaredError {
    fn name(&self) -> &'static str {
        "rmse"
    }

    fn higher_is_better(&self) -> bool {
        false
    }

    fn decomposable(&self) -> bool {
        false
    }

    fn instance_loss(&self, expected: &f64, predicted: &f64) -> Option<f64> {
        if expected.is_finite() && predicted.is_finite() {
            Some((expected - predicted).powi(2))
        } else {
            None
        }
    }

    fn finish(&self, raw: f64) -> f64 {
        raw.sqrt()
    }
}

/// Zero-one error: fraction of exact mismatches
///
/// Suited to ordinal class labels carried as scalars.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroOneError;

impl Metric<f64> for ZeroOneError {
    fn name(&self) -> &'static str {
        "zero_one"
    }

    fn higher_is_better(&self) -> bool {
        false
    }

    fn instance_loss(&self, expected: &f64, predicted: &f64) -> Option<f64> {
        if expected.is_finite() && predicted.is_finite() {
            Some(if expected == predicted { 0.0 } else { 1.0 })
        } else {
            None
        }
    }
}
