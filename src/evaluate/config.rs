//! Evaluation configuration

use crate::split::SplitSpec;
use serde::{Deserialize, Serialize};

/// Configuration for a batch evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalConfig {
    /// Splitting strategy and its parameters
    pub split: SplitSpec,
    /// Metric names to compute, in reporting order
    pub metrics: Vec<String>,
    /// Seed for this run; `None` draws from the process-wide source
    pub seed: Option<u64>,
    /// Evaluate combinations and folds in parallel
    pub parallel: bool,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            split: SplitSpec::InSample,
            metrics: Vec::new(),
            seed: None,
            parallel: false,
        }
    }
}

impl EvalConfig {
    /// Configuration with the given split and metrics, defaults elsewhere
    pub fn new(split: SplitSpec, metrics: Vec<String>) -> Self {
        Self {
            split,
            metrics,
            ..Self::default()
        }
    }

    /// Set an explicit seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable parallel evaluation
    pub fn with_parallel(mut self) -> Self {
        self.parallel = true;
        self
    }
}
