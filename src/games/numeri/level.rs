//! Difficulty levels and the score thresholds that unlock them.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Score needed to reach levels 2 through 5, highest first.
const THRESHOLDS: [(u32, u8); 4] = [(500, 5), (300, 4), (150, 3), (50, 2)];

/// Difficulty level, always in `1..=5`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    /// Starting level.
    pub const FIRST: Level = Level(1);

    /// Highest level; decimals appear here.
    pub const MAX: Level = Level(5);

    /// Creates a level, or `None` outside `1..=5`.
    pub fn new(level: u8) -> Option<Self> {
        (Self::FIRST.0..=Self::MAX.0)
            .contains(&level)
            .then_some(Self(level))
    }

    /// Returns the level number.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Largest integer drawn at this level.
    pub fn cap(self) -> u8 {
        match self.0 {
            1 => 10,
            2 => 20,
            3 => 50,
            _ => 100,
        }
    }

    /// Returns true if challenges may carry a fractional group.
    pub fn allows_decimals(self) -> bool {
        self >= Self::MAX
    }

    /// Highest level whose threshold the score has reached.
    #[instrument]
    pub fn for_score(score: u32) -> Self {
        THRESHOLDS
            .iter()
            .find(|(min, _)| score >= *min)
            .map_or(Self::FIRST, |(_, level)| Self(*level))
    }

    /// Level after reaching `score`; never lower than `self`.
    pub fn promoted(self, score: u32) -> Self {
        self.max(Self::for_score(score))
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<u8> for Level {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("level {} is outside 1..=5", value))
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}
