//! Game primitives: doors, trials, and the host behavior trait.
//!
//! The [`Host`] trait is the seam between the generic trial runner and the
//! two game variants. A host sees the prize door and the contestant's
//! choice and decides which door to open.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One of the three doors, identified by an index in `0..=2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Door(u8);

impl Door {
    /// All three doors, in index order.
    pub const ALL: [Door; 3] = [Door(0), Door(1), Door(2)];

    /// Create a door from an index, rejecting indices outside `0..=2`.
    pub fn new(index: u8) -> Option<Door> {
        (index < 3).then_some(Door(index))
    }

    /// The door's index.
    pub fn index(self) -> u8 {
        self.0
    }

    /// Draw a door uniformly at random.
    pub fn random<R: Rng>(rng: &mut R) -> Door {
        Door(rng.gen_range(0..3))
    }

    /// The two doors other than this one, in index order.
    pub fn others(self) -> [Door; 2] {
        match self.0 {
            0 => [Door(1), Door(2)],
            1 => [Door(0), Door(2)],
            _ => [Door(0), Door(1)],
        }
    }

    /// The third door, given two distinct doors.
    ///
    /// The indices sum to 3, so the remaining door is `3 - a - b`.
    pub fn remaining(a: Door, b: Door) -> Door {
        debug_assert_ne!(a, b, "remaining door requires two distinct doors");
        Door(3 - a.0 - b.0)
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a single trial ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The contestant's final choice hid the prize.
    Win,
    /// The contestant's final choice did not hide the prize.
    Loss,
    /// The host opened the prize door, ending the game (random-reveal
    /// variant only).
    HostWin,
}

/// The full record of one trial.
///
/// Ephemeral: the runner computes a `Trial`, tallies its outcome, and
/// discards it. Kept as a value so tests and tracing can inspect the
/// door assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trial {
    /// The door hiding the prize.
    pub prize: Door,
    /// The contestant's initial choice.
    pub initial: Door,
    /// The door the host opened.
    pub reveal: Door,
    /// The contestant's final choice, or `None` when the host revealed
    /// the prize and no choice was made.
    pub final_choice: Option<Door>,
    /// How the trial ended.
    pub outcome: Outcome,
}

/// A host's door-reveal behavior.
///
/// The host sees the prize door and the contestant's current choice and
/// opens one of the two doors the contestant did not pick. Implementations
/// must never open the contestant's door.
pub trait Host {
    /// Pick the door to open.
    fn reveal<R: Rng>(&self, prize: Door, chosen: Door, rng: &mut R) -> Door;

    /// Short name for banners and logs.
    fn name(&self) -> &'static str;
}

/// Play a single trial against the given host.
///
/// Draws the prize door and the contestant's initial choice uniformly and
/// independently, asks the host for a reveal, then applies the switch
/// policy. Infallible: the door set is fixed and every path produces an
/// outcome.
pub fn play_trial<H: Host, R: Rng>(host: &H, switch: bool, rng: &mut R) -> Trial {
    let prize = Door::random(rng);
    let initial = Door::random(rng);
    let reveal = host.reveal(prize, initial, rng);
    debug_assert_ne!(reveal, initial, "host opened the contestant's door");

    if reveal == prize {
        return Trial {
            prize,
            initial,
            reveal,
            final_choice: None,
            outcome: Outcome::HostWin,
        };
    }

    let final_choice = if switch {
        Door::remaining(initial, reveal)
    } else {
        initial
    };

    let outcome = if final_choice == prize {
        Outcome::Win
    } else {
        Outcome::Loss
    };

    Trial {
        prize,
        initial,
        reveal,
        final_choice: Some(final_choice),
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::classic::ClassicHost;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_door_construction() {
        assert_eq!(Door::new(0), Some(Door::ALL[0]));
        assert_eq!(Door::new(2), Some(Door::ALL[2]));
        assert_eq!(Door::new(3), None);
        assert_eq!(Door::new(255), None);
    }

    #[test]
    fn test_door_others_and_remaining() {
        for door in Door::ALL {
            let [a, b] = door.others();
            assert_ne!(a, door);
            assert_ne!(b, door);
            assert_ne!(a, b);
            // Closing the other two always leads back to the original door
            assert_eq!(Door::remaining(a, b), door);
        }
    }

    #[test]
    fn test_door_random_is_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1_000 {
            let door = Door::random(&mut rng);
            assert!(door.index() < 3);
        }
    }

    #[test]
    fn test_trial_switch_moves_to_remaining_door() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1_000 {
            let trial = play_trial(&ClassicHost, true, &mut rng);
            let final_choice = trial.final_choice.unwrap();
            assert_ne!(trial.reveal, trial.initial);
            assert_eq!(final_choice, Door::remaining(trial.initial, trial.reveal));
            assert_eq!(trial.outcome == Outcome::Win, final_choice == trial.prize);
        }
    }

    #[test]
    fn test_trial_keep_stays_on_initial_door() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1_000 {
            let trial = play_trial(&ClassicHost, false, &mut rng);
            assert_eq!(trial.final_choice, Some(trial.initial));
            assert_eq!(trial.outcome == Outcome::Win, trial.initial == trial.prize);
        }
    }
}
