//! The classic Monty Hall host.
//!
//! ## Reveal Rule
//!
//! The host knows where the prize is and never opens the contestant's door
//! or the prize door:
//!
//! - If the contestant's choice is wrong, exactly one of the two other
//!   doors hides the prize, so the host's reveal is forced: the remaining
//!   goat door.
//! - If the contestant's choice is right, both other doors hide goats and
//!   the host opens one of them uniformly at random.
//!
//! ## Why Switching Wins
//!
//! The initial choice is right with probability 1/3. Whenever it is wrong
//! (probability 2/3), the host's forced reveal leaves the prize behind the
//! remaining unopened door, so switching wins exactly when the initial
//! choice was wrong:
//!
//! ```text
//! P(win | switch) = 2/3        P(win | keep) = 1/3
//! ```

use rand::Rng;

use crate::sim::game::{Door, Host};

/// The classic informed host.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicHost;

impl Host for ClassicHost {
    fn reveal<R: Rng>(&self, prize: Door, chosen: Door, rng: &mut R) -> Door {
        if prize != chosen {
            // Forced: the one door that is neither chosen nor the prize
            Door::remaining(chosen, prize)
        } else {
            // Free choice between the two goat doors
            let others = chosen.others();
            others[rng.gen_range(0..2)]
        }
    }

    fn name(&self) -> &'static str {
        "classic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_reveal_never_chosen_or_prize() {
        let mut rng = StdRng::seed_from_u64(42);
        for prize in Door::ALL {
            for chosen in Door::ALL {
                for _ in 0..100 {
                    let reveal = ClassicHost.reveal(prize, chosen, &mut rng);
                    assert_ne!(reveal, chosen);
                    assert_ne!(reveal, prize);
                }
            }
        }
    }

    #[test]
    fn test_reveal_forced_when_choice_is_wrong() {
        let mut rng = StdRng::seed_from_u64(42);
        for prize in Door::ALL {
            for chosen in Door::ALL {
                if prize == chosen {
                    continue;
                }
                let reveal = ClassicHost.reveal(prize, chosen, &mut rng);
                assert_eq!(reveal, Door::remaining(chosen, prize));
            }
        }
    }

    #[test]
    fn test_reveal_uses_both_goat_doors_when_choice_is_right() {
        let mut rng = StdRng::seed_from_u64(42);
        for door in Door::ALL {
            let [a, b] = door.others();
            let mut seen = [false, false];
            for _ in 0..200 {
                let reveal = ClassicHost.reveal(door, door, &mut rng);
                if reveal == a {
                    seen[0] = true;
                } else {
                    assert_eq!(reveal, b);
                    seen[1] = true;
                }
            }
            assert!(seen[0], "host never opened door {}", a);
            assert!(seen[1], "host never opened door {}", b);
        }
    }
}
