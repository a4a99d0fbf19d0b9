//! Points awarded for a correct answer.

use super::challenge::Challenge;

/// Base points for an integer challenge.
pub const INTEGER_POINTS: u32 = 10;

/// Base points for a decimal challenge.
pub const DECIMAL_POINTS: u32 = 20;

/// Consecutive answers needed per multiplier step.
pub const STREAK_STEP: u32 = 3;

/// Multiplier for an answer given with `streak` correct answers already banked.
///
/// The streak is read before the current answer is counted, so a fresh streak
/// scores at 1x until three answers are banked.
pub fn multiplier(streak: u32) -> u32 {
    streak / STREAK_STEP + 1
}

/// Base points for the challenge before the multiplier.
pub fn base_points(challenge: &Challenge) -> u32 {
    if challenge.is_decimal() {
        DECIMAL_POINTS
    } else {
        INTEGER_POINTS
    }
}

/// Points for answering `challenge` with `streak` answers already banked.
pub fn points(challenge: &Challenge, streak: u32) -> u32 {
    base_points(challenge) * multiplier(streak)
}
