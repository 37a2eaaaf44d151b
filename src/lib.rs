//! # Monty Hall Simulator
//!
//! A Monte Carlo simulator for the Monty Hall problem and a random-reveal
//! variant, estimating winning probabilities empirically over repeated
//! independent trials.
//!
//! ## Features
//!
//! - **Generic Trial Engine**: Works with any host behavior implementing the `Host` trait
//! - **Two Host Rules**: The classic informed host and a random-reveal host
//! - **Switch/Keep Policies**: Compare changing doors against keeping the first pick
//! - **Reproducible Runs**: Seedable random number generation
//! - **Parallel Batches**: Optional rayon-based trial batching
//!
//! ## Quick Start
//!
//! ```
//! use monty_hall_sim::sim::{SimConfig, TrialRunner};
//! use monty_hall_sim::games::classic::ClassicHost;
//!
//! // 1. Configure the run
//! let config = SimConfig::default().with_trials(10_000).with_seed(42);
//!
//! // 2. Run the trials
//! let mut runner = TrialRunner::new(ClassicHost, config);
//! let stats = runner.run().unwrap();
//!
//! // 3. Read off the empirical win rate
//! println!("won {:.2} % of {} trials", stats.win_rate(), stats.trials);
//! ```
//!
//! ## Modules
//!
//! - [`sim`]: Core trial engine, configuration, and aggregate statistics
//! - [`games`]: Host-rule implementations (classic, random reveal)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Trial Runner (Generic)                       │
//! │  - Prize/choice draws       - Win/loss/host-win tallies         │
//! │  - Switch policy            - Serial or parallel batches        │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               │ implements Host trait
//!                               ▼
//!                 ┌─────────────┴─────────────┐
//!                 │                           │
//!                 ▼                           ▼
//!          ┌─────────────┐            ┌──────────────┐
//!          │   Classic   │            │    Random    │
//!          │    Host     │            │    Reveal    │
//!          └─────────────┘            └──────────────┘
//! ```

#![warn(missing_docs)]

/// Trial engine module.
///
/// This is the core module containing the generic trial runner.
pub mod sim;

/// Host-rule implementations module.
///
/// Contains the classic host and the random-reveal host.
pub mod games;

// Re-export commonly used types at crate root for convenience
pub use sim::{AggregateStats, ConfigError, Door, Host, Outcome, SimConfig, Trial, TrialRunner};
