use std::path::PathBuf;

use evaluation::{TimeStrategy, Weights};

use crate::error::EvalError;

pub const DEFAULT_POSITION_WEIGHT: f64 = 0.7;
pub const DEFAULT_TIME_WEIGHT: f64 = 0.3;
/// Seconds below which time pressure starts to matter.
pub const DEFAULT_TIME_THRESHOLD: f64 = 60.0;
pub const DEFAULT_SEARCH_DEPTH: u8 = 20;

/// Tunable parameters for the clock-aware evaluator, fixed at construction.
///
/// The weights are used exactly as given: nothing enforces
/// `position_weight + time_weight == 1.0`, so a combined evaluation can leave
/// `[-1, 1]` when the weights sum past one. That tradeoff is the caller's.
#[derive(Debug, Clone)]
pub struct EvaluatorConfig {
    pub engine_path: PathBuf,
    pub position_weight: f64,
    pub time_weight: f64,
    pub time_threshold: f64,
    pub search_depth: u8,
    pub time_strategy: TimeStrategy,
}

impl EvaluatorConfig {
    pub fn new(engine_path: impl Into<PathBuf>) -> Self {
        Self {
            engine_path: engine_path.into(),
            position_weight: DEFAULT_POSITION_WEIGHT,
            time_weight: DEFAULT_TIME_WEIGHT,
            time_threshold: DEFAULT_TIME_THRESHOLD,
            search_depth: DEFAULT_SEARCH_DEPTH,
            time_strategy: TimeStrategy::default(),
        }
    }

    pub fn with_weights(mut self, position: f64, time: f64) -> Self {
        self.position_weight = position;
        self.time_weight = time;
        self
    }

    pub fn with_threshold(mut self, seconds: f64) -> Self {
        self.time_threshold = seconds;
        self
    }

    pub fn with_depth(mut self, depth: u8) -> Self {
        self.search_depth = depth;
        self
    }

    pub fn with_strategy(mut self, strategy: TimeStrategy) -> Self {
        self.time_strategy = strategy;
        self
    }

    pub fn weights(&self) -> Weights {
        Weights::new(self.position_weight, self.time_weight)
    }

    /// Check the numeric parameters. The sigmoid and hard-threshold
    /// strategies divide by the threshold, so it must be positive.
    pub fn validate_parameters(&self) -> Result<(), EvalError> {
        if self.time_threshold.is_nan() || self.time_threshold <= 0.0 {
            return Err(EvalError::invalid_input(format!(
                "time threshold must be positive, got {}",
                self.time_threshold
            )));
        }
        if self.search_depth == 0 {
            return Err(EvalError::invalid_input("search depth must be positive"));
        }
        Ok(())
    }

    /// Full pre-session validation: parameters plus the engine executable.
    pub fn validate(&self) -> Result<(), EvalError> {
        self.validate_parameters()?;

        if !self.engine_path.exists() {
            return Err(EvalError::Configuration {
                path: self.engine_path.clone(),
            });
        }
        Ok(())
    }
}
