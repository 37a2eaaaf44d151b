//! The trial runner and aggregate statistics.
//!
//! The runner executes a configured number of independent trials against a
//! host rule and accumulates win/loss/host-win counters. Trials run
//! serially by default; with `num_threads >= 2` the run is split into
//! independently seeded batches reduced with rayon.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sim::config::{ConfigError, SimConfig};
use crate::sim::game::{play_trial, Host, Outcome};

/// Aggregate counters and rates from a simulation run.
///
/// Counters satisfy `wins + losses + host_wins == trials`; `host_wins` is
/// zero for the classic host, which never opens the prize door.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    /// Total number of trials recorded.
    pub trials: u64,

    /// Trials the contestant's final choice won.
    pub wins: u64,

    /// Trials the contestant's final choice lost.
    pub losses: u64,

    /// Trials ended by the host opening the prize door
    /// (random-reveal variant only).
    pub host_wins: u64,

    /// Wall-clock time spent running trials, in seconds.
    pub elapsed_seconds: f64,

    /// Trials per second.
    pub trials_per_second: f64,
}

impl AggregateStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Winning percentage over all trials, in `0.0..=100.0`.
    pub fn win_rate(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.wins as f64 / self.trials as f64 * 100.0
    }

    /// Percentage of trials the host ended by opening the prize door.
    pub fn host_win_rate(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.host_wins as f64 / self.trials as f64 * 100.0
    }

    /// Winning percentage over the trials where the host did not open the
    /// prize door, or `None` when every trial was a host win.
    pub fn conditional_win_rate(&self) -> Option<f64> {
        let decided = self.trials - self.host_wins;
        if decided == 0 {
            return None;
        }
        Some(self.wins as f64 / decided as f64 * 100.0)
    }

    /// Fold another partial result into this one.
    ///
    /// Counters are summed; elapsed time takes the maximum, treating the
    /// partials as having run concurrently.
    pub fn merge(&mut self, other: &AggregateStats) {
        self.trials += other.trials;
        self.wins += other.wins;
        self.losses += other.losses;
        self.host_wins += other.host_wins;
        self.elapsed_seconds = self.elapsed_seconds.max(other.elapsed_seconds);
        self.update_rate();
    }

    /// Tally one trial outcome.
    pub fn record(&mut self, outcome: Outcome) {
        self.trials += 1;
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::HostWin => self.host_wins += 1,
        }
    }

    /// Update trials per second from the elapsed time.
    pub fn update_rate(&mut self) {
        if self.elapsed_seconds > 0.0 {
            self.trials_per_second = self.trials as f64 / self.elapsed_seconds;
        }
    }
}

/// The trial runner.
///
/// Generic over any host behavior implementing the [`Host`] trait, in the
/// same way for both game variants.
///
/// # Example
/// ```
/// use monty_hall_sim::sim::{SimConfig, TrialRunner};
/// use monty_hall_sim::games::classic::ClassicHost;
///
/// let config = SimConfig::default().with_trials(1_000).with_seed(42);
/// let mut runner = TrialRunner::new(ClassicHost, config);
/// let stats = runner.run().unwrap();
/// assert_eq!(stats.wins + stats.losses, 1_000);
/// ```
pub struct TrialRunner<H: Host> {
    /// The host being played against.
    host: H,

    /// Configuration for the run.
    config: SimConfig,

    /// Random number generator for the serial path.
    rng: StdRng,

    /// Trials completed so far.
    completed: u64,

    /// Win counter.
    wins: u64,

    /// Loss counter.
    losses: u64,

    /// Host-win counter.
    host_wins: u64,

    /// Accumulated wall-clock time spent in trial batches.
    elapsed: Duration,
}

impl<H: Host> TrialRunner<H> {
    /// Create a new runner for the given host and configuration.
    pub fn new(host: H, config: SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            host,
            config,
            rng,
            completed: 0,
            wins: 0,
            losses: 0,
            host_wins: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// The configuration this runner was built with.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Trials completed so far.
    pub fn completed(&self) -> u64 {
        self.completed
    }

    /// Run a batch of `n` trials serially against the internal counters.
    ///
    /// Binaries drive a progress bar by calling this in a loop; a batch
    /// draws from the same seeded stream as one large run, so splitting a
    /// run into batches does not change the counts.
    pub fn run_batch(&mut self, n: u64) {
        let start = Instant::now();
        let switch = self.config.switch;

        for i in 0..n {
            let trial = play_trial(&self.host, switch, &mut self.rng);
            log::debug!(
                "trial {}: prize={} chosen={} reveal={} outcome={:?}",
                self.completed + i,
                trial.prize,
                trial.initial,
                trial.reveal,
                trial.outcome
            );
            match trial.outcome {
                Outcome::Win => self.wins += 1,
                Outcome::Loss => self.losses += 1,
                Outcome::HostWin => self.host_wins += 1,
            }
        }

        self.completed += n;
        self.elapsed += start.elapsed();
    }

    /// Snapshot the aggregate statistics accumulated so far.
    pub fn stats(&self) -> AggregateStats {
        let mut stats = AggregateStats {
            trials: self.completed,
            wins: self.wins,
            losses: self.losses,
            host_wins: self.host_wins,
            elapsed_seconds: self.elapsed.as_secs_f64(),
            trials_per_second: 0.0,
        };
        stats.update_rate();
        stats
    }
}

impl<H: Host + Sync> TrialRunner<H> {
    /// Run the configured trial count to completion.
    ///
    /// Validates the configuration, executes the remaining trials (serial,
    /// or in parallel batches when `num_threads >= 2`), and returns the
    /// aggregate statistics.
    pub fn run(&mut self) -> Result<AggregateStats, ConfigError> {
        self.config.validate()?;

        let remaining = self.config.trials.saturating_sub(self.completed);
        if remaining > 0 {
            if self.config.is_parallel() {
                self.run_parallel(remaining);
            } else {
                self.run_batch(remaining);
            }
        }

        Ok(self.stats())
    }

    /// Run `n` trials split across parallel batches.
    ///
    /// Each batch gets its own `StdRng` with a seed derived from the base
    /// seed and the batch index, so a fixed seed and thread count
    /// reproduce the same counts regardless of scheduling.
    fn run_parallel(&mut self, n: u64) {
        let start = Instant::now();
        let threads = self.config.num_threads.unwrap_or(1).max(1) as u64;
        let switch = self.config.switch;
        let seed = self.config.seed;
        let host = &self.host;

        // Fixed chunk sizes: the first (n % threads) batches get one extra
        let base = n / threads;
        let extra = n % threads;

        let partial = (0..threads)
            .into_par_iter()
            .map(|idx| {
                let count = base + u64::from(idx < extra);
                let mut rng = match seed {
                    Some(s) => StdRng::seed_from_u64(batch_seed(s, idx)),
                    None => StdRng::from_entropy(),
                };
                let mut stats = AggregateStats::new();
                for _ in 0..count {
                    stats.record(play_trial(host, switch, &mut rng).outcome);
                }
                stats
            })
            .reduce(AggregateStats::new, |mut a, b| {
                a.merge(&b);
                a
            });

        self.completed += partial.trials;
        self.wins += partial.wins;
        self.losses += partial.losses;
        self.host_wins += partial.host_wins;
        self.elapsed += start.elapsed();
    }
}

/// Derive a batch seed from the base seed and the batch index.
///
/// Distinct batches must not share an RNG stream; mixing the index with a
/// 64-bit odd constant keeps derived seeds well separated.
fn batch_seed(base: u64, index: u64) -> u64 {
    base ^ index.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
