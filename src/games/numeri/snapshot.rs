//! Read-only projection of a session for rendering.

use super::level::Level;
use super::phases::{Feedback, Phase};
use serde::Serialize;

/// Everything the render surface needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Current score.
    pub score: u32,
    /// Consecutive correct answers.
    pub streak: u32,
    /// Longest streak this session.
    pub max_streak: u32,
    /// Multiplier the next correct answer will earn.
    pub multiplier: u32,
    /// Lives remaining.
    pub lives: u8,
    /// Lives at the start of a session.
    pub max_lives: u8,
    /// Current level.
    pub level: Level,
    /// Largest integer drawn at this level.
    pub level_cap: u8,
    /// Feedback for the current challenge.
    pub feedback: Feedback,
    /// Session phase.
    pub phase: Phase,
    /// Challenge digits with a comma separator.
    pub digits: String,
    /// Challenge in words.
    pub words: String,
    /// Points awarded for the last answer to this challenge.
    pub last_award: Option<u32>,
    /// Whether replay is possible.
    pub speech_available: bool,
    /// True between the losing answer and the game-over phase.
    pub game_over_pending: bool,
}
