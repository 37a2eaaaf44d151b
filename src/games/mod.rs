//! Host-rule implementations.
//!
//! Two hosts are provided:
//!
//! - [`classic::ClassicHost`]: the standard Monty Hall host, who knows
//!   where the prize is and never opens the prize door
//! - [`random_reveal::RandomHost`]: a host who opens one of the two
//!   non-chosen doors uniformly at random, prize included
//!
//! Both implement the [`crate::sim::Host`] trait and run through the same
//! generic [`crate::sim::TrialRunner`].

pub mod classic;
pub mod random_reveal;

pub use classic::ClassicHost;
pub use random_reveal::RandomHost;
