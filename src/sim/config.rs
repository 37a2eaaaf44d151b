//! Configuration options for the trial runner.
//!
//! This module provides the configuration struct controlling a simulation
//! run: trial count, switch policy, random seed, and parallelism.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Configuration for a simulation run.
///
/// # Example
/// ```
/// use monty_hall_sim::sim::SimConfig;
///
/// let config = SimConfig::default();
/// assert!(config.switch); // switching is the default policy
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of trials to run. Must be at least 1.
    pub trials: u64,

    /// Switch policy: change to the remaining unopened door after the
    /// host's reveal (`true`), or keep the initial choice (`false`).
    pub switch: bool,

    /// Random seed for reproducibility.
    ///
    /// If set, the run uses this seed for random number generation, making
    /// aggregate counts reproducible. If `None`, a random seed is used.
    pub seed: Option<u64>,

    /// Number of threads for parallel trial batches.
    ///
    /// `None`, 0, or 1 runs the trials serially. A value of `n >= 2`
    /// splits the run into `n` independently seeded batches reduced with
    /// rayon.
    pub num_threads: Option<usize>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            trials: 500_000,
            switch: true,
            seed: None,
            num_threads: None,
        }
    }
}

impl SimConfig {
    /// Create a new SimConfig with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the trial count.
    pub fn with_trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }

    /// Builder method: set the switch policy.
    pub fn with_switch(mut self, switch: bool) -> Self {
        self.switch = switch;
        self
    }

    /// Builder method: set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method: set the number of threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.num_threads = Some(threads);
        self
    }

    /// Whether this configuration selects the parallel path.
    pub fn is_parallel(&self) -> bool {
        self.num_threads.map_or(false, |t| t > 1)
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_json_str(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trials == 0 {
            return Err(ConfigError::InvalidTrialCount(self.trials));
        }
        Ok(())
    }
}

/// Errors that can occur when building or validating a configuration.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Trial count is not a positive integer.
    InvalidTrialCount(u64),
    /// A config file could not be read.
    IoError(String),
    /// A config file could not be parsed as JSON.
    ParseError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidTrialCount(val) => {
                write!(f, "Trial count must be at least 1, got {}", val)
            }
            ConfigError::IoError(msg) => write!(f, "Failed to read config file: {}", msg),
            ConfigError::ParseError(msg) => write!(f, "Failed to parse config file: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
