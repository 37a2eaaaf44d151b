//! The random-reveal host variant.
//!
//! ## Reveal Rule
//!
//! After the contestant's initial choice, the host opens one of the two
//! remaining doors uniformly at random, without looking at the prize. If
//! the host opens the prize door the game is over and the trial counts as
//! a host win; otherwise the contestant is offered the usual switch.
//!
//! ## Why the Odds Change
//!
//! The random reveal carries no information about the prize, so surviving
//! it leaves the contestant's door and the remaining door symmetric:
//!
//! ```text
//! P(host reveals prize)        = 2/3 * 1/2 = 1/3
//! P(win | switch, host missed) = 1/2
//! P(win | keep,   host missed) = 1/2
//! ```
//!
//! The overall win rate for either policy is 1/3, since a third of the
//! trials end before the contestant's final choice.

use rand::Rng;

use crate::sim::game::{Door, Host};

/// The uninformed host, who may open the prize door.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomHost;

impl Host for RandomHost {
    fn reveal<R: Rng>(&self, _prize: Door, chosen: Door, rng: &mut R) -> Door {
        let others = chosen.others();
        others[rng.gen_range(0..2)]
    }

    fn name(&self) -> &'static str {
        "random reveal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_reveal_never_chosen() {
        let mut rng = StdRng::seed_from_u64(42);
        for prize in Door::ALL {
            for chosen in Door::ALL {
                for _ in 0..100 {
                    let reveal = RandomHost.reveal(prize, chosen, &mut rng);
                    assert_ne!(reveal, chosen);
                }
            }
        }
    }

    #[test]
    fn test_reveal_can_hit_the_prize() {
        // Unlike the classic host, the random host sometimes opens the
        // prize door when the contestant's choice was wrong.
        let mut rng = StdRng::seed_from_u64(42);
        let prize = Door::ALL[0];
        let chosen = Door::ALL[1];
        let mut hit = false;
        for _ in 0..200 {
            if RandomHost.reveal(prize, chosen, &mut rng) == prize {
                hit = true;
                break;
            }
        }
        assert!(hit, "random host never opened the prize door in 200 draws");
    }

    #[test]
    fn test_reveal_uses_both_doors() {
        let mut rng = StdRng::seed_from_u64(42);
        for chosen in Door::ALL {
            let [a, b] = chosen.others();
            let mut seen = [false, false];
            for _ in 0..200 {
                let reveal = RandomHost.reveal(chosen, chosen, &mut rng);
                if reveal == a {
                    seen[0] = true;
                } else {
                    assert_eq!(reveal, b);
                    seen[1] = true;
                }
            }
            assert!(seen[0] && seen[1], "both non-chosen doors should appear");
        }
    }
}
