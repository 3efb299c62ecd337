use crate::error::{MiningError, Result};

/// Thresholds and switches for one mining run.
#[derive(Debug, Clone, PartialEq)]
pub struct AprioriConfig {
    /// Fraction of transactions an itemset must appear in, in (0, 1].
    pub min_support: f64,
    /// Minimum rule confidence, in (0, 1].
    pub min_confidence: f64,
    /// Largest itemset size to mine; unbounded when `None`.
    pub max_len: Option<usize>,
    /// Skip counting candidates that have an infrequent k-subset.
    pub prune_subsets: bool,
    /// Count candidate supports on the rayon pool.
    pub parallel: bool,
}

impl Default for AprioriConfig {
    fn default() -> Self {
        Self {
            min_support: 0.1,
            min_confidence: 0.5,
            max_len: None,
            prune_subsets: true,
            parallel: true,
        }
    }
}

impl AprioriConfig {
    pub fn new(min_support: f64, min_confidence: f64) -> Self {
        Self {
            min_support,
            min_confidence,
            ..Self::default()
        }
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn with_subset_pruning(mut self, prune_subsets: bool) -> Self {
        self.prune_subsets = prune_subsets;
        self
    }

    pub fn with_parallelism(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !in_unit_interval(self.min_support) {
            return Err(MiningError::InvalidSupport(self.min_support));
        }
        if !in_unit_interval(self.min_confidence) {
            return Err(MiningError::InvalidConfidence(self.min_confidence));
        }
        if self.max_len == Some(0) {
            return Err(MiningError::InvalidMaxLen);
        }
        Ok(())
    }
}

// NaN fails both comparisons.
fn in_unit_interval(value: f64) -> bool {
    value > 0.0 && value <= 1.0
}
