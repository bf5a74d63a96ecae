//! Dataset abstraction consumed by the evaluation driver
//!
//! The driver only needs an ordered, indexable view of instances with a
//! known length, an expected-outcome accessor, and an order-preserving
//! subset operation. Parsing datasets from files is somebody else's job.

use crate::outcome::Outcome;
use serde::{Deserialize, Serialize};

/// An ordered collection of instances sharing one outcome representation
pub trait Dataset: Send + Sync {
    /// Outcome representation of every instance
    type Outcome: Outcome;

    /// Dataset identity, carried into evaluation results
    fn name(&self) -> &str;

    /// Number of instances
    fn len(&self) -> usize;

    /// True when the dataset holds no instances
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Expected outcome of the instance at `index`
    fn expected(&self, index: usize) -> &Self::Outcome;

    /// Order-preserving copy of the instances at `indices`
    fn subset(&self, indices: &[usize]) -> Self
    where
        Self: Sized;
}

/// One feature/outcome pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance<F, O> {
    /// Problem-specific feature representation
    pub features: F,
    /// Expected outcome used for scoring
    pub expected: O,
}

/// Dataset held fully in memory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InMemoryDataset<F, O> {
    name: String,
    instances: Vec<Instance<F, O>>,
}

impl<F, O> InMemoryDataset<F, O> {
    /// Dataset from prebuilt instances
    pub fn new(name: impl Into<String>, instances: Vec<Instance<F, O>>) -> Self {
        Self {
            name: name.into(),
            instances,
        }
    }

    /// Dataset from (features, expected) pairs
    pub fn from_pairs(name: impl Into<String>, pairs: Vec<(F, O)>) -> Self {
        let instances = pairs
            .into_iter()
            .map(|(features, expected)| Instance { features, expected })
            .collect();
        Self::new(name, instances)
    }

    /// All instances in order
    pub fn instances(&self) -> &[Instance<F, O>] {
        &self.instances
    }
}

impl<F, O> Dataset for InMemoryDataset<F, O>
where
    F: Clone + Send + Sync,
    O: Outcome,
{
    type Outcome = O;

    fn name(&self) -> &str {
        &self.name
    }

    fn len(&self) -> usize {
        self.instances.len()
    }

    fn expected(&self, index: usize) -> &O {
        &self.instances[index].expected
    }

    fn subset(&self, indices: &[usize]) -> Self {
        Self {
            name: self.name.clone(),
            instances: indices.iter().map(|&i| self.instances[i].clone()).collect(),
        }
    }
}

/// Evaluation input: one dataset to partition, or an already-split pair
///
/// The supplied-test-set strategy requires the pair form and performs no
/// shuffling; every other strategy requires the single form.
#[derive(Debug, Clone)]
pub enum Source<D> {
    /// A single dataset the split strategy will partition
    Single(D),
    /// Two independently supplied datasets
    TrainTest { train: D, test: D },
}

impl<D: Dataset> Source<D> {
    /// Identity reported for this source
    pub fn name(&self) -> &str {
        match self {
            Self::Single(data) => data.name(),
            Self::TrainTest { train, .. } => train.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subset_preserves_order_and_name() {
        let data: InMemoryDataset<f64, f64> =
            InMemoryDataset::from_pairs("ratings", vec![(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)]);
        let sub = data.subset(&[2, 0]);
        assert_eq!(sub.name(), "ratings");
        assert_eq!(sub.len(), 2);
        assert_eq!(*sub.expected(0), 3.0);
        assert_eq!(*sub.expected(1), 1.0);
    }

    #[test]
    fn test_source_name() {
        let train: InMemoryDataset<f64, f64> = InMemoryDataset::from_pairs("a", vec![(0.0, 0.0)]);
        let test: InMemoryDataset<f64, f64> = InMemoryDataset::from_pairs("b", vec![(0.0, 0.0)]);
        assert_eq!(Source::Single(train.clone()).name(), "a");
        assert_eq!(Source::TrainTest { train, test }.name(), "a");
    }
}
