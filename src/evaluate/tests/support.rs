//! Stub learners and datasets shared by the driver tests

use crate::dataset::{Dataset, InMemoryDataset};
use crate::learner::{Learner, LearnerError, LearnerResult, Model};

pub type ScalarData = InMemoryDataset<f64, f64>;

/// Echoes the test partition's expected outcomes: a perfect predictor
pub struct Oracle;

struct OracleModel;

impl<D: Dataset> Learner<D> for Oracle {
    fn name(&self) -> &str {
        "oracle"
    }

    fn fit(&self, _train: &D) -> LearnerResult<Box<dyn Model<D>>> {
        Ok(Box::new(OracleModel))
    }
}

impl<D: Dataset> Model<D> for OracleModel {
    fn predict(&self, test: &D) -> LearnerResult<Vec<D::Outcome>> {
        Ok((0..test.len()).map(|i| test.expected(i).clone()).collect())
    }
}

/// Predicts one fixed scalar for every instance
pub struct Constant {
    pub name: &'static str,
    pub value: f64,
}

struct ConstantModel(f64);

impl Learner<ScalarData> for Constant {
    fn name(&self) -> &str {
        self.name
    }

    fn fit(&self, _train: &ScalarData) -> LearnerResult<Box<dyn Model<ScalarData>>> {
        Ok(Box::new(ConstantModel(self.value)))
    }
}

impl Model<ScalarData> for ConstantModel {
    fn predict(&self, test: &ScalarData) -> LearnerResult<Vec<f64>> {
        Ok(vec![self.0; test.len()])
    }
}

/// Fails at fit time
pub struct Broken;

impl<D: Dataset> Learner<D> for Broken {
    fn name(&self) -> &str {
        "broken"
    }

    fn fit(&self, _train: &D) -> LearnerResult<Box<dyn Model<D>>> {
        Err(LearnerError::new("synthetic training failure"))
    }
}

/// Prediction fails when the test partition has the configured length
pub struct PickyOnTestLen(pub usize);

struct PickyModel(usize);

impl<D: Dataset> Learner<D> for PickyOnTestLen {
    fn name(&self) -> &str {
        "picky"
    }

    fn fit(&self, _train: &D) -> LearnerResult<Box<dyn Model<D>>> {
        Ok(Box::new(PickyModel(self.0)))
    }
}

impl<D: Dataset> Model<D> for PickyModel {
    fn predict(&self, test: &D) -> LearnerResult<Vec<D::Outcome>> {
        if test.len() == self.0 {
            return Err(LearnerError::new("synthetic prediction failure"));
        }
        Ok((0..test.len()).map(|i| test.expected(i).clone()).collect())
    }
}

/// Scalar dataset with labels cycling 0..5
pub fn ratings(name: &str, n: usize) -> ScalarData {
    InMemoryDataset::from_pairs(name, (0..n).map(|i| (i as f64, (i % 5) as f64)).collect())
}
