//! Engine configuration.

use crate::rng::RandomizerPolicy;
use crate::scoring::ScoringTable;

/// Settings fixed for the lifetime of one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Seed for the randomizer; equal seeds replay equal piece sequences
    pub seed: u64,
    pub randomizer: RandomizerPolicy,
    pub scoring: ScoringTable,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            randomizer: RandomizerPolicy::Bag,
            scoring: ScoringTable::Classic,
        }
    }
}

impl EngineConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_randomizer(mut self, randomizer: RandomizerPolicy) -> Self {
        self.randomizer = randomizer;
        self
    }

    pub fn with_scoring(mut self, scoring: ScoringTable) -> Self {
        self.scoring = scoring;
        self
    }
}
