//! Runner configuration read from the environment.

use tracing::level_filters::LevelFilter;

use web_tetris_core::{EngineConfig, RandomizerPolicy};
use web_tetris_types::DEFAULT_TICK_MS;

/// Fastest gravity the runner accepts
const MIN_TICK_MS: u64 = 16;

#[derive(Debug, Clone, PartialEq)]
pub struct RunnerConfig {
    /// Explicit seed; a random one is drawn when unset
    pub seed: Option<u64>,
    pub tick_ms: u64,
    pub randomizer: RandomizerPolicy,
    pub log_level: LevelFilter,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_ms: DEFAULT_TICK_MS as u64,
            randomizer: RandomizerPolicy::Bag,
            log_level: LevelFilter::OFF,
        }
    }
}

impl RunnerConfig {
    /// Create from environment variables
    ///
    /// - `TETRIS_SEED`: u64 seed
    /// - `TETRIS_TICK_MS`: gravity interval, at least 16
    /// - `TETRIS_RANDOMIZER`: `bag` or `uniform`
    /// - `TETRIS_LOG`: `off`, `error`, `warn`, `info`, `debug`, `trace`
    ///
    /// Unparseable values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("TETRIS_SEED").and_then(|s| s.trim().parse().ok());

        let tick_ms = lookup("TETRIS_TICK_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(|ms| ms.max(MIN_TICK_MS))
            .unwrap_or(defaults.tick_ms);

        let randomizer = lookup("TETRIS_RANDOMIZER")
            .and_then(|s| RandomizerPolicy::from_str(&s))
            .unwrap_or(defaults.randomizer);

        let log_level = lookup("TETRIS_LOG")
            .and_then(|s| s.trim().parse::<LevelFilter>().ok())
            .unwrap_or(defaults.log_level);

        Self {
            seed,
            tick_ms,
            randomizer,
            log_level,
        }
    }

    /// Engine settings for a new session, drawing a seed if none was given
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::default()
            .with_seed(self.seed.unwrap_or_else(rand::random))
            .with_randomizer(self.randomizer)
    }
}
