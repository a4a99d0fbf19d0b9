//! Where challenges come from.
//!
//! The session draws through [`ChallengeSource`] so tests can script the
//! sequence of numbers instead of seeding a generator.

use super::challenge::Challenge;
use super::level::Level;
use rand::Rng;
use tracing::{debug, instrument};

/// Chance that a level-5 challenge carries a fractional group.
pub const DECIMAL_CHANCE: f64 = 0.3;

/// Supplies the next challenge for a level.
pub trait ChallengeSource {
    /// Returns the next challenge for `level`.
    fn next_challenge(&mut self, level: Level) -> Challenge;
}

/// Draws a challenge uniformly from `1..=level.cap()`.
///
/// At levels that allow decimals, a fractional group in `1..=99` is attached
/// with probability [`DECIMAL_CHANCE`].
#[instrument(skip(rng))]
pub fn draw_challenge<R: Rng + ?Sized>(rng: &mut R, level: Level) -> Challenge {
    let whole = rng.random_range(1..=level.cap());
    let challenge = if level.allows_decimals() && rng.random_bool(DECIMAL_CHANCE) {
        let fraction = rng.random_range(1..=Challenge::MAX_FRACTION);
        Challenge::from_draw(whole, fraction)
    } else {
        Challenge::from_draw(whole, 0)
    };
    debug!(%challenge, "Drew challenge");
    challenge
}

/// Random challenges backed by any [`Rng`].
#[derive(Debug, Clone)]
pub struct RandomChallenges<R> {
    rng: R,
}

impl<R: Rng> RandomChallenges<R> {
    /// Wraps a random number generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ChallengeSource for RandomChallenges<R> {
    fn next_challenge(&mut self, level: Level) -> Challenge {
        draw_challenge(&mut self.rng, level)
    }
}
