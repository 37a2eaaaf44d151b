//! Monty Hall Trial Engine.
//!
//! This module provides the generic trial runner used to estimate winning
//! probabilities for the Monty Hall problem by repeated random sampling.
//!
//! # Overview
//!
//! Each trial is a complete playthrough of the game:
//! 1. A prize door is drawn uniformly from the three doors
//! 2. The contestant's initial choice is drawn uniformly, independently
//! 3. The host opens one of the two other doors, per the variant's rule
//! 4. The contestant either keeps the initial choice or switches to the
//!    remaining unopened door
//! 5. The trial is a win if the final choice hides the prize
//!
//! Trials are independent, so aggregate win counts divided by the trial
//! count converge to the true winning probability of the chosen policy.
//!
//! # Usage
//!
//! 1. Pick a host rule (see [`crate::games`]) or implement the [`Host`] trait
//! 2. Build a [`SimConfig`] with the trial count and policy
//! 3. Create a [`TrialRunner`] and call [`TrialRunner::run`]
//! 4. Read rates off the returned [`AggregateStats`]
//!
//! # Example
//!
//! ```
//! use monty_hall_sim::sim::{SimConfig, TrialRunner};
//! use monty_hall_sim::games::random_reveal::RandomHost;
//!
//! let config = SimConfig::default().with_trials(10_000).with_seed(7);
//! let mut runner = TrialRunner::new(RandomHost, config);
//! let stats = runner.run().unwrap();
//!
//! // Every trial lands in exactly one bucket.
//! assert_eq!(stats.wins + stats.losses + stats.host_wins, stats.trials);
//! ```
//!
//! # Theory
//!
//! With the classic host (who knows the prize and never reveals it),
//! switching wins exactly when the initial choice was wrong:
//!
//! ```text
//! P(win | switch) = P(initial choice wrong) = 2/3
//! P(win | keep)   = P(initial choice right) = 1/3
//! ```
//!
//! With a host who opens one of the two other doors uniformly at random,
//! the reveal carries no information. The host exposes the prize with
//! probability 1/3 and ends the game; conditioned on the host missing,
//! switching and keeping both win with probability 1/2:
//!
//! ```text
//! P(host reveals prize)        = 2/3 * 1/2 = 1/3
//! P(win | switch, host missed) = 1/2
//! P(win | keep,   host missed) = 1/2
//! ```
//!
//! # References
//!
//! - Selvin, S. "A problem in probability" (1975)
//! - vos Savant, M. "Ask Marilyn" column, Parade (1990)
//! - Rosenthal, J. "Monty Hall, Monty Fall, Monty Crawl" (2008)

pub mod config;
pub mod game;
pub mod runner;

// Re-export main types for convenient access
pub use config::{ConfigError, SimConfig};
pub use game::{play_trial, Door, Host, Outcome, Trial};
pub use runner::{AggregateStats, TrialRunner};
