//! Feedback and phase markers for the session state machine.

use serde::{Deserialize, Serialize};

/// Result shown for the current challenge.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Feedback {
    /// Waiting for an answer.
    #[default]
    Idle,
    /// The last answer was right.
    Correct,
    /// The last answer was wrong.
    Incorrect,
}

impl Feedback {
    /// Italian verdict shown to the player.
    pub fn verdict(self) -> Option<&'static str> {
        match self {
            Feedback::Idle => None,
            Feedback::Correct => Some("Esatto!"),
            Feedback::Incorrect => Some("Sbagliato!"),
        }
    }
}

/// Session phase. `GameOver` is left only by restarting.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    /// Challenges are being answered.
    #[default]
    Playing,
    /// Lives are exhausted.
    GameOver,
}

impl Phase {
    /// Returns true once the game has ended.
    pub fn is_over(self) -> bool {
        matches!(self, Phase::GameOver)
    }
}
